//! Стандартный словарь диалекта (MySQL-подобный SQL)

/// Ключевые слова, начинающие новую секцию запроса
pub const RESERVED_TOPLEVEL: &[&str] = &[
    "SELECT",
    "FROM",
    "WHERE",
    "SET",
    "ORDER BY",
    "GROUP BY",
    "LIMIT",
    "DROP",
    "VALUES",
    "UPDATE",
    "HAVING",
    "ADD",
    "AFTER",
    "ALTER TABLE",
    "DELETE FROM",
    "INSERT INTO",
    "UNION ALL",
    "UNION",
    "EXCEPT",
    "INTERSECT",
    "WITH",
    "RETURNING",
    "ON DUPLICATE KEY UPDATE",
];

/// Ключевые слова, начинающие новую строку
pub const RESERVED_NEWLINE: &[&str] = &[
    "LEFT OUTER JOIN",
    "RIGHT OUTER JOIN",
    "FULL OUTER JOIN",
    "LEFT JOIN",
    "RIGHT JOIN",
    "FULL JOIN",
    "OUTER JOIN",
    "INNER JOIN",
    "CROSS JOIN",
    "NATURAL JOIN",
    "STRAIGHT_JOIN",
    "JOIN",
    "XOR",
    "OR",
    "AND",
    "WHEN",
    "ELSE",
];

/// Прочие зарезервированные слова
pub const RESERVED: &[&str] = &[
    "ACCESSIBLE",
    "ACTION",
    "AGAINST",
    "AGGREGATE",
    "ALGORITHM",
    "ALL",
    "ALTER",
    "ANALYSE",
    "ANALYZE",
    "AS",
    "ASC",
    "AUTOCOMMIT",
    "AUTO_INCREMENT",
    "BACKUP",
    "BEGIN",
    "BETWEEN",
    "BINLOG",
    "BOTH",
    "BY",
    "CASCADE",
    "CASE",
    "CHANGE",
    "CHANGED",
    "CHARACTER SET",
    "CHARSET",
    "CHECK",
    "CHECKSUM",
    "COLLATE",
    "COLLATION",
    "COLUMN",
    "COLUMNS",
    "COMMENT",
    "COMMIT",
    "COMMITTED",
    "COMPRESSED",
    "CONCURRENT",
    "CONSTRAINT",
    "CONTAINS",
    "CONVERT",
    "CREATE",
    "CROSS",
    "CURRENT_DATE",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "CURRENT_USER",
    "DATABASE",
    "DATABASES",
    "DAY",
    "DAY_HOUR",
    "DAY_MINUTE",
    "DAY_SECOND",
    "DEFAULT",
    "DEFINER",
    "DELAYED",
    "DELETE",
    "DESC",
    "DESCRIBE",
    "DETERMINISTIC",
    "DISTINCT",
    "DISTINCTROW",
    "DIV",
    "DO",
    "DUMPFILE",
    "DUPLICATE",
    "DYNAMIC",
    "ENCLOSED",
    "END",
    "ENGINE",
    "ENGINES",
    "ESCAPE",
    "ESCAPED",
    "EVENTS",
    "EXEC",
    "EXECUTE",
    "EXISTS",
    "EXPLAIN",
    "EXTENDED",
    "FALSE",
    "FAST",
    "FIELDS",
    "FILE",
    "FIRST",
    "FIXED",
    "FLUSH",
    "FOR",
    "FORCE",
    "FOREIGN",
    "FULL",
    "FULLTEXT",
    "FUNCTION",
    "GLOBAL",
    "GRANT",
    "GRANTS",
    "GROUP_CONCAT",
    "HEAP",
    "HIGH_PRIORITY",
    "HOSTS",
    "HOUR",
    "HOUR_MINUTE",
    "HOUR_SECOND",
    "IDENTIFIED",
    "IF",
    "IGNORE",
    "IN",
    "INDEX",
    "INDEXES",
    "INFILE",
    "INNER",
    "INSERT",
    "INSERT_ID",
    "INSERT_METHOD",
    "INTERVAL",
    "INTO",
    "INVOKER",
    "IS",
    "ISOLATION",
    "KEY",
    "KEYS",
    "KILL",
    "LAST_INSERT_ID",
    "LEADING",
    "LEFT",
    "LEVEL",
    "LIKE",
    "LINEAR",
    "LINES",
    "LOAD",
    "LOCAL",
    "LOCK",
    "LOCKS",
    "LOGS",
    "LOW_PRIORITY",
    "MASTER",
    "MATCH",
    "MAX_ROWS",
    "MERGE",
    "MINUTE",
    "MINUTE_SECOND",
    "MIN_ROWS",
    "MODE",
    "MODIFY",
    "MONTH",
    "NATURAL",
    "NOT",
    "NULL",
    "OFFSET",
    "ON",
    "OPEN",
    "OPTIMIZE",
    "OPTION",
    "OPTIONALLY",
    "OUTER",
    "OUTFILE",
    "OVER",
    "PARTIAL",
    "PARTITION",
    "PARTITIONS",
    "PASSWORD",
    "PRIMARY",
    "PRIVILEGES",
    "PROCEDURE",
    "PROCESS",
    "PROCESSLIST",
    "PURGE",
    "QUICK",
    "RANGE",
    "READ",
    "READ_ONLY",
    "READ_WRITE",
    "RECURSIVE",
    "REFERENCES",
    "REGEXP",
    "RELOAD",
    "RENAME",
    "REPAIR",
    "REPEATABLE",
    "REPLACE",
    "REPLICATION",
    "RESET",
    "RESTORE",
    "RESTRICT",
    "RETURN",
    "RETURNS",
    "REVOKE",
    "RIGHT",
    "RLIKE",
    "ROLLBACK",
    "ROW",
    "ROWS",
    "ROW_FORMAT",
    "SECOND",
    "SECURITY",
    "SEPARATOR",
    "SERIALIZABLE",
    "SESSION",
    "SHARE",
    "SHOW",
    "SHUTDOWN",
    "SLAVE",
    "SONAME",
    "SOUNDS",
    "SQL",
    "SQL_CACHE",
    "SQL_CALC_FOUND_ROWS",
    "SQL_NO_CACHE",
    "START",
    "STARTING",
    "STATUS",
    "STOP",
    "STORAGE",
    "STRING",
    "SUPER",
    "TABLE",
    "TABLES",
    "TEMPORARY",
    "TERMINATED",
    "THEN",
    "TO",
    "TRAILING",
    "TRANSACTION",
    "TRIGGER",
    "TRUE",
    "TRUNCATE",
    "TYPE",
    "TYPES",
    "UNCOMMITTED",
    "UNIQUE",
    "UNLOCK",
    "UNSIGNED",
    "USAGE",
    "USE",
    "USING",
    "VARIABLES",
    "VIEW",
    "WORK",
    "WRITE",
    "YEAR_MONTH",
];

/// Известные функции (распознаются только перед `(`)
pub const FUNCTIONS: &[&str] = &[
    "ABS",
    "ACOS",
    "ADDDATE",
    "ADDTIME",
    "AES_DECRYPT",
    "AES_ENCRYPT",
    "ASCII",
    "ASIN",
    "ATAN",
    "ATAN2",
    "AVG",
    "BIN",
    "BIT_AND",
    "BIT_COUNT",
    "BIT_LENGTH",
    "BIT_OR",
    "BIT_XOR",
    "CAST",
    "CEIL",
    "CEILING",
    "CHAR",
    "CHAR_LENGTH",
    "CHARACTER_LENGTH",
    "COALESCE",
    "CONCAT",
    "CONCAT_WS",
    "CONV",
    "COS",
    "COT",
    "COUNT",
    "CRC32",
    "CURDATE",
    "CURTIME",
    "DATE",
    "DATE_ADD",
    "DATE_FORMAT",
    "DATE_SUB",
    "DATEDIFF",
    "DAYNAME",
    "DAYOFMONTH",
    "DAYOFWEEK",
    "DAYOFYEAR",
    "DEGREES",
    "ELT",
    "EXP",
    "EXTRACT",
    "FIELD",
    "FIND_IN_SET",
    "FLOOR",
    "FORMAT",
    "FROM_UNIXTIME",
    "GREATEST",
    "HEX",
    "IFNULL",
    "INSTR",
    "ISNULL",
    "LCASE",
    "LEAST",
    "LENGTH",
    "LN",
    "LOCATE",
    "LOG",
    "LOG10",
    "LOG2",
    "LOWER",
    "LPAD",
    "LTRIM",
    "MAX",
    "MD5",
    "MID",
    "MIN",
    "MOD",
    "NOW",
    "NULLIF",
    "OCT",
    "ORD",
    "PI",
    "POSITION",
    "POW",
    "POWER",
    "QUARTER",
    "QUOTE",
    "RADIANS",
    "RAND",
    "REPEAT",
    "REVERSE",
    "ROUND",
    "RPAD",
    "RTRIM",
    "SHA1",
    "SHA2",
    "SIGN",
    "SIN",
    "SPACE",
    "SQRT",
    "STD",
    "STDDEV",
    "STR_TO_DATE",
    "STRCMP",
    "SUBDATE",
    "SUBSTR",
    "SUBSTRING",
    "SUBSTRING_INDEX",
    "SUM",
    "SYSDATE",
    "TAN",
    "TIME_FORMAT",
    "TIMEDIFF",
    "TIMESTAMPDIFF",
    "TRIM",
    "UCASE",
    "UNHEX",
    "UNIX_TIMESTAMP",
    "UPPER",
    "UUID",
    "VARIANCE",
    "WEEK",
    "WEEKDAY",
    "YEAR",
];

/// Пунктуация и операторы
pub const BOUNDARIES: &[&str] = &[
    ",", ";", ":", ")", "(", ".", "=", "<", ">", "+", "-", "*", "/", "!", "^", "%", "|", "&",
    "#", "~", "?", "[", "]", "{", "}", "<=", ">=", "<>", "!=", "<=>", "::", ":=", "||", "&&",
    "<<", ">>", "->", "->>", "=>",
];
