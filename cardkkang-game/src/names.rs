//! Embedded card-name list. Names are drawn uniformly; rarity is independent
//! of the name.

pub const CARD_NAMES: [&str; 20] = [
    "피카츄",
    "이상해씨",
    "파이리",
    "꼬부기",
    "이브이",
    "푸린",
    "고오스",
    "갸라도스",
    "뮤",
    "뮤츠",
    "마자용",
    "히스이 조로아",
    "루카리오",
    "야도란",
    "잠만보",
    "리자몽",
    "나인테일",
    "푸크린",
    "암나이트",
    "팬텀",
];
