// src/domain/ticket_number.rs

//! チケット番号の生成とパース
//!
//! チケット番号は `TKT-` + ゼロ埋め6桁の連番（例: `TKT-000042`）。
//! 連番そのものの払い出しは `TicketRepository` がカウンタ行の行ロックで
//! 直列化して行い、このモジュールは整形とパースのみを担う。

/// チケット番号のプレフィックス
pub const TICKET_NUMBER_PREFIX: &str = "TKT-";

/// ゼロ埋めの桁数
pub const TICKET_NUMBER_PAD_WIDTH: usize = 6;

/// 連番からチケット番号を整形
///
/// 6桁を超える連番はそのまま桁が伸びる（ゼロ埋めは最低6桁の保証）。
pub fn format_ticket_number(sequence: i64) -> String {
    format!(
        "{}{:0width$}",
        TICKET_NUMBER_PREFIX,
        sequence,
        width = TICKET_NUMBER_PAD_WIDTH
    )
}

/// チケット番号から連番を取り出す
///
/// 形式が `TKT-<数字>` でない場合は `None`。
pub fn parse_ticket_number(ticket_number: &str) -> Option<i64> {
    let digits = ticket_number.strip_prefix(TICKET_NUMBER_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format_ticket_number(1), "TKT-000001");
        assert_eq!(format_ticket_number(42), "TKT-000042");
        assert_eq!(format_ticket_number(999999), "TKT-999999");
    }

    #[test]
    fn test_format_beyond_six_digits() {
        // 100万件を超えても番号は一意のまま桁が伸びる
        assert_eq!(format_ticket_number(1000000), "TKT-1000000");
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_ticket_number("TKT-000042"), Some(42));
        assert_eq!(parse_ticket_number("TKT-000001"), Some(1));
        assert_eq!(parse_ticket_number("TKT-1000000"), Some(1000000));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_ticket_number("TKT-"), None);
        assert_eq!(parse_ticket_number("TKT-12a"), None);
        assert_eq!(parse_ticket_number("TICKET-000001"), None);
        assert_eq!(parse_ticket_number("000001"), None);
        assert_eq!(parse_ticket_number(""), None);
    }

    #[test]
    fn test_roundtrip_preserves_ordering() {
        // 連番で整形した番号は辞書順でも数値順でも単調増加する
        let numbers: Vec<String> = (1..=100).map(format_ticket_number).collect();
        let mut sorted = numbers.clone();
        sorted.sort();
        assert_eq!(numbers, sorted);

        for (i, number) in numbers.iter().enumerate() {
            assert_eq!(parse_ticket_number(number), Some(i as i64 + 1));
        }
    }
}
