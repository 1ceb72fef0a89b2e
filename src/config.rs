//! Application-level configuration constants.

// Confirmation dialog
pub const EXIT_TRANSITION_MS: u32 = 300;

// Active navigation link
pub const SECTION_OFFSET_PX: f64 = 100.0;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0;
pub const REVEAL_ANIMATION: &str = "fadeInUp 0.6s ease forwards";
/// Window events after which hidden cards are re-measured.
pub const REVEAL_EVENTS: &[&str] = &["scroll", "resize"];

// Pointer effects
pub const PARALLAX_SPEED_STEP_PX: f64 = 20.0;
pub const HERO_BALL_COUNT: usize = 3;
pub const TILT_DIVISOR: f64 = 20.0;
pub const TILT_PERSPECTIVE_PX: u32 = 1000;
pub const TILT_LIFT_PX: u32 = 8;

pub const LOADED_MESSAGE: &str = "🏓 Table Tennis Website Loaded Successfully!";

// Page content

/// (anchor, link text)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Начало"),
    ("#tournaments", "Турнири"),
    ("#results", "Резултати"),
    ("#info", "Информация"),
    ("#registration", "Регистрация"),
];

pub struct Tournament {
    pub name: &'static str,
    pub date: &'static str,
    pub venue: &'static str,
    pub category: &'static str,
}

pub const TOURNAMENTS: &[Tournament] = &[
    Tournament {
        name: "Софийски открит турнир",
        date: "15 март",
        venue: "Зала Универсиада, София",
        category: "Open",
    },
    Tournament {
        name: "Пловдивска купа",
        date: "12 април",
        venue: "Спортна зала Строител, Пловдив",
        category: "Аматьори",
    },
    Tournament {
        name: "Черноморски шампионат",
        date: "7 юни",
        venue: "Дворец на културата и спорта, Варна",
        category: "Ветерани",
    },
];

/// (event, winner, score)
pub const RESULTS: &[(&str, &str, &str)] = &[
    ("Зимна купа", "Георги Иванов", "4 : 2"),
    ("Купа Рила", "Мария Петрова", "4 : 1"),
    ("Градско първенство", "Николай Димитров", "4 : 3"),
];

/// (title, text)
pub const INFO_CARDS: &[(&str, &str)] = &[
    ("Формат", "Групова фаза и елиминации до 3 спечелени гейма."),
    ("Екипировка", "Ракети и топки ITTF, одобрени за официални срещи."),
    ("Такса", "Участието се заплаща на място преди началото на турнира."),
];

pub const EXPERIENCE_LEVELS: &[&str] = &[
    "Начинаещ",
    "До 2 години",
    "2 до 5 години",
    "Над 5 години",
];
