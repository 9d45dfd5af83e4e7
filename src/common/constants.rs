//! Константы для sqlscan

/// Длина префикса (в символах), по которому строится ключ кэша
pub const DEFAULT_CACHE_PREFIX_SIZE: usize = 15;

/// Максимальное количество записей в кэше по умолчанию
pub const DEFAULT_CACHE_CAPACITY: usize = 65536;

/// Уровень логирования по умолчанию
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Имя конфигурационного файла, который ищется в текущей директории
pub const DEFAULT_CONFIG_FILE: &str = "sqlscan.toml";

/// Префикс переменных окружения
pub const ENV_PREFIX: &str = "SQLSCAN_";
