//! Built-in display names for the Korean short book names.
//!
//! The bundled dataset only carries short names (`창`, `요`, `고전`, ...);
//! slide titles use the full name.

use std::collections::HashMap;
use lazy_static::lazy_static;

/// Canonical book order with (short name, full name) pairs.
pub const BOOK_ORDER: &[(&str, &str)] = &[
    ("창", "창세기"),
    ("출", "출애굽기"),
    ("레", "레위기"),
    ("민", "민수기"),
    ("신", "신명기"),
    ("수", "여호수아"),
    ("삿", "사사기"),
    ("룻", "룻기"),
    ("삼상", "사무엘상"),
    ("삼하", "사무엘하"),
    ("왕상", "열왕기상"),
    ("왕하", "열왕기하"),
    ("대상", "역대상"),
    ("대하", "역대하"),
    ("스", "에스라"),
    ("느", "느헤미야"),
    ("에", "에스더"),
    ("욥", "욥기"),
    ("시", "시편"),
    ("잠", "잠언"),
    ("전", "전도서"),
    ("아", "아가"),
    ("사", "이사야"),
    ("렘", "예레미야"),
    ("애", "예레미야애가"),
    ("겔", "에스겔"),
    ("단", "다니엘"),
    ("호", "호세아"),
    ("욜", "요엘"),
    ("암", "아모스"),
    ("옵", "오바댜"),
    ("욘", "요나"),
    ("미", "미가"),
    ("나", "나훔"),
    ("합", "하박국"),
    ("습", "스바냐"),
    ("학", "학개"),
    ("슥", "스가랴"),
    ("말", "말라기"),
    ("마", "마태복음"),
    ("막", "마가복음"),
    ("눅", "누가복음"),
    ("요", "요한복음"),
    ("행", "사도행전"),
    ("롬", "로마서"),
    ("고전", "고린도전서"),
    ("고후", "고린도후서"),
    ("갈", "갈라디아서"),
    ("엡", "에베소서"),
    ("빌", "빌립보서"),
    ("골", "골로새서"),
    ("살전", "데살로니가전서"),
    ("살후", "데살로니가후서"),
    ("딤전", "디모데전서"),
    ("딤후", "디모데후서"),
    ("딛", "디도서"),
    ("몬", "빌레몬서"),
    ("히", "히브리서"),
    ("약", "야고보서"),
    ("벧전", "베드로전서"),
    ("벧후", "베드로후서"),
    ("요일", "요한1서"),
    ("요이", "요한2서"),
    ("요삼", "요한3서"),
    ("유", "유다서"),
    ("계", "요한계시록"),
];

/// Full name of the Psalms, which counts in 편 rather than 장.
pub const PSALMS: &str = "시편";

lazy_static! {
    static ref FULL_NAMES: HashMap<&'static str, &'static str> =
        BOOK_ORDER.iter().copied().collect();
}

/// Look up the full display name for a short book name.
pub fn full_name(short: &str) -> Option<&'static str> {
    FULL_NAMES.get(short).copied()
}

/// Position of a short name in canonical order, used to sort listings.
pub fn canonical_position(short: &str) -> Option<usize> {
    BOOK_ORDER.iter().position(|(s, _)| *s == short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_lookup() {
        assert_eq!(full_name("창"), Some("창세기"));
        assert_eq!(full_name("요일"), Some("요한1서"));
        assert_eq!(full_name("John"), None);
    }

    #[test]
    fn test_table_has_sixty_six_books() {
        assert_eq!(BOOK_ORDER.len(), 66);
        assert_eq!(FULL_NAMES.len(), 66);
    }

    #[test]
    fn test_canonical_position() {
        assert_eq!(canonical_position("창"), Some(0));
        assert_eq!(canonical_position("계"), Some(65));
        assert!(canonical_position("마") < canonical_position("막"));
    }
}
