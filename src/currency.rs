//! 货币格式化 (en-IN / INR，无小数位)

const SYMBOL: &str = "₹";

/// 按印度数字分组格式化金额: 末三位一组，其余每两位一组
pub fn format_inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}{}", sign, SYMBOL, group_indian(&digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead > 0 {
        out.push_str(&head[..lead]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead > 0 {
            out.push(',');
        }
        // 纯 ASCII 数字
        out.push(pair[0] as char);
        out.push(pair[1] as char);
    }
    out.push(',');
    out.push_str(tail);
    out
}
