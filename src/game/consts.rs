pub const ROUNDS_PER_GAME: u8 = 5;

pub const ROUND_DURATION_SECS: u64 = 300;

pub const NO_GUESS_MESSAGE: &str = "Пожалуйста, выберите место на карте.";

pub const TIME_EXPIRED_MESSAGE: &str = "Время вышло!";

pub const NO_PANORAMA_MESSAGE: &str = "Не удалось найти место с панорамой.";
