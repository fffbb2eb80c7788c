//! Rendering then re-parsing gives back the same tree.

mod common;

use common::{renders_as, round_trip};

#[test]
fn test_round_trip_queries() {
    for sql in [
        "SELECT 1",
        "SELECT * FROM t",
        "SELECT DISTINCT a, b AS c FROM db.t AS x WHERE x.a > 1",
        "SELECT SQL_CALC_FOUND_ROWS a FROM t GROUP BY a WITH ROLLUP HAVING COUNT(*) > 1",
        "SELECT a FROM t ORDER BY a DESC, b LIMIT 5, 10",
        "SELECT a FROM t LIMIT ? OFFSET ?",
        "SELECT a FROM t FOR UPDATE",
        "SELECT a FROM t LOCK IN SHARE MODE",
        "SELECT 1 FROM DUAL",
        "SELECT * FROM a LEFT JOIN b JOIN c ON b.id = c.id",
        "SELECT * FROM a LEFT JOIN b USING (id) CROSS JOIN c",
        "SELECT * FROM t USE INDEX FOR ORDER BY (i1, PRIMARY) WHERE a = 1",
        "SELECT * FROM (SELECT a FROM t) AS d",
        "SELECT 1 UNION SELECT 2 ORDER BY 1",
        "(SELECT 1 ORDER BY 1) UNION SELECT 2",
        "SELECT a FROM t UNION ALL SELECT b FROM u UNION SELECT c FROM v LIMIT 3",
        "SELECT * FROM ((SELECT 1) UNION (SELECT 2)) AS d",
        "SELECT * FROM ((SELECT 1 ORDER BY 1) UNION SELECT 2) AS d",
        "SELECT a FROM t WHERE a IN ((SELECT 1) UNION (SELECT 2))",
        "SELECT ((SELECT a FROM t LIMIT 1) UNION SELECT 2), ((SELECT 1)) + 1",
        "SELECT 1., 2.5",
        "DELETE FROM t WHERE a = 1.",
    ] {
        round_trip(sql);
    }
}

#[test]
fn test_round_trip_expressions() {
    for sql in [
        "SELECT 1 OR 0 AND 0",
        "SELECT (1 OR 0) AND 0",
        "SELECT NOT 1 = 1",
        "SELECT 2 * 3 ^ 1",
        "SELECT (a + b) * c - d / e DIV f MOD g",
        "SELECT a - (b - c), (a - b) - c",
        "SELECT a << 1 | b & c",
        "SELECT -a, - -a, ~a, !a, BINARY a",
        "SELECT a NOT BETWEEN 1 AND 2",
        "SELECT a LIKE 'x%' ESCAPE '!', a NOT REGEXP '^b', a SOUNDS LIKE b",
        "SELECT a IS NOT NULL, a IS TRUE, a IS UNKNOWN",
        "SELECT a IN (1, 2), a NOT IN (SELECT b FROM t)",
        "SELECT a > ALL (SELECT b FROM t), a = ANY (SELECT b FROM t)",
        "SELECT EXISTS (SELECT 1), (SELECT MAX(a) FROM t)",
        "SELECT (1, 2) = (3, 4)",
        "SELECT @a := 1 OR 0",
        "SELECT @x, @@sql_mode, @@SESSION.autocommit",
        "SELECT CASE a WHEN 1 THEN 'one' ELSE 'many' END",
        "SELECT CASE WHEN a > 1 THEN b END",
        "SELECT a COLLATE utf8mb4_bin",
        "SELECT d + INTERVAL 1 DAY, INTERVAL(5, 1, 10)",
        "SELECT x'0A', 0x1, b'01', N'n', _utf8'u', 1.5, 'it''s', TRUE, NULL",
        "SELECT ?, ?",
    ] {
        round_trip(sql);
    }
}

#[test]
fn test_round_trip_functions() {
    for sql in [
        "SELECT CAST(a AS UNSIGNED INTEGER), CAST(b AS DECIMAL(10, 2)), CAST(c AS CHAR(3))",
        "SELECT CONVERT(a, SIGNED), CONVERT(b USING utf8mb4)",
        "SELECT count(DISTINCT a, b), COUNT(*), SUM(x)",
        "SELECT TRIM(a), TRIM(LEADING 'x' FROM a), TRIM('y' FROM b)",
        "SELECT SUBSTRING(a, 2, 3), SUBSTRING(a FROM 2 FOR 3)",
        "SELECT EXTRACT(YEAR FROM d), TIMESTAMPDIFF(DAY, a, b)",
        "SELECT POSITION('a' IN b)",
        "SELECT GROUP_CONCAT(DISTINCT a ORDER BY a DESC SEPARATOR ';')",
        "SELECT CURRENT_TIMESTAMP, NOW(), UTC_TIME(3)",
        "SELECT MATCH (title, body) AGAINST ('word' IN BOOLEAN MODE)",
        "SELECT POINT(1, 2), CONCAT('a', 'b')",
    ] {
        round_trip(sql);
    }
}

#[test]
fn test_round_trip_data_modification() {
    for sql in [
        "INSERT INTO t (a, b) VALUES (1, 2), (3, DEFAULT) ON DUPLICATE KEY UPDATE b = VALUES(b)",
        "INSERT IGNORE INTO t SET a = 1, b = 'x'",
        "REPLACE INTO t (a) SELECT a FROM s",
        "UPDATE LOW_PRIORITY t SET a = a + 1 WHERE b = 2 ORDER BY c LIMIT 3",
        "UPDATE t1 JOIN t2 ON t1.id = t2.id SET t1.a = t2.b",
        "DELETE FROM t WHERE a = 1 LIMIT 1",
        "DELETE t1, t2 FROM t1 JOIN t2 ON t1.a = t2.a WHERE t1.b = 0",
        "DELETE FROM t1.*, t2 USING t1 JOIN t2 ON t1.a = t2.a",
        "CALL p(1, @out)",
    ] {
        round_trip(sql);
    }
}

#[test]
fn test_round_trip_definitions() {
    for sql in [
        "CREATE TABLE t (id INT UNSIGNED AUTO_INCREMENT NOT NULL PRIMARY KEY COMMENT 'pk', \
         ts TIMESTAMP ON UPDATE CURRENT_TIMESTAMP DEFAULT CURRENT_TIMESTAMP NULL)",
        "CREATE TABLE t (a INT) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4, COMMENT 'x' AUTO_INCREMENT = 5",
        "CREATE TEMPORARY TABLE IF NOT EXISTS c LIKE t",
        "CREATE TABLE t IGNORE SELECT * FROM s",
        "CREATE TABLE t (a INT, CONSTRAINT fk FOREIGN KEY (a) REFERENCES p (x) ON DELETE SET NULL)",
        "CREATE TABLE t (a VARCHAR(10), UNIQUE KEY u (a(5)), FULLTEXT INDEX f (a), CHECK (a <> ''))",
        "CREATE TABLE t (s ENUM('a', 'b') CHARACTER SET latin1, d DECIMAL(10,2) UNSIGNED ZEROFILL)",
        "ALTER TABLE t DROP COLUMN a, ADD INDEX idx (b(10) DESC), MODIFY c VARCHAR(20) NOT NULL, \
         CHANGE d e BIGINT, RENAME TO u, ALGORITHM = INPLACE, DROP FOREIGN KEY fk",
        "ALTER TABLE t ADD COLUMN c INT FIRST, ALTER COLUMN b SET DEFAULT 1, DROP PRIMARY KEY",
        "ALTER TABLE t ENGINE = MyISAM COMMENT = 'c'",
        "ALTER TABLE t CONVERT TO CHARACTER SET utf8mb4 COLLATE utf8mb4_bin",
        "DROP TEMPORARY TABLE IF EXISTS a, b CASCADE",
        "RENAME TABLE a TO b, c TO d",
        "TRUNCATE TABLE t",
        "CREATE UNIQUE INDEX i USING BTREE ON t (a, b) COMMENT 'c'",
        "DROP INDEX i ON t",
        "DROP INDEX i ON t ALGORITHM = INPLACE LOCK = NONE",
        "CREATE DATABASE IF NOT EXISTS db CHARACTER SET utf8mb4",
        "DROP DATABASE IF EXISTS db",
        "CREATE DEFINER = 'admin'@'%' FUNCTION f(x INT) RETURNS INT DETERMINISTIC RETURN x + 1",
        "CREATE PROCEDURE p(IN a INT, OUT b VARCHAR(10)) BEGIN SET b = a; END",
        "CREATE TRIGGER trg BEFORE INSERT ON t FOR EACH ROW SET NEW.total = NEW.a + 1",
        "CREATE OR REPLACE VIEW v (a) AS SELECT a FROM t WITH CHECK OPTION",
        "CREATE EVENT e ON SCHEDULE EVERY 1 HOUR STARTS '2024-01-01' \
         ON COMPLETION NOT PRESERVE DISABLE DO DELETE FROM log",
        "ALTER EVENT e ON SCHEDULE EVERY 2 DAY",
        "DROP VIEW IF EXISTS v1, v2",
        "DROP FUNCTION IF EXISTS f",
    ] {
        round_trip(sql);
    }
}

#[test]
fn test_round_trip_administration() {
    for sql in [
        "SHOW DATABASES LIKE 'app%'",
        "SHOW FULL TABLES FROM db WHERE Table_type = 'VIEW'",
        "SHOW GLOBAL VARIABLES LIKE 'max%'",
        "SHOW COUNT(*) WARNINGS",
        "SHOW CREATE TABLE db.t",
        "SHOW INDEX FROM t IN db",
        "SHOW PROFILE CPU, BLOCK IO FOR QUERY 3",
        "SHOW FULL COLUMNS FROM t FROM db LIKE 'a%'",
        "SET GLOBAL max_connections = 10, sort_buffer_size = 5, @x := 1",
        "SET NAMES utf8mb4 COLLATE utf8mb4_bin",
        "SET CHARACTER SET DEFAULT",
        "SET SESSION TRANSACTION ISOLATION LEVEL READ COMMITTED, READ ONLY",
        "EXPLAIN FORMAT=JSON SELECT 1",
        "DESC t 'na%'",
        "USE db",
    ] {
        round_trip(sql);
    }
}

#[test]
fn test_round_trip_programs_and_transactions() {
    for sql in [
        "lbl: BEGIN SELECT 1; END lbl",
        "w: WHILE i < 10 DO SET i = i + 1; END WHILE w",
        "REPEAT FETCH c INTO x; UNTIL done END REPEAT",
        "l: LOOP LEAVE l; END LOOP l",
        "BEGIN IF x THEN SELECT 1; ELSEIF y THEN SELECT 2; ELSE SELECT 3; END IF; END",
        "CASE x WHEN 1 THEN SELECT 'a'; ELSE SELECT 'b'; END CASE",
        "DECLARE a, b INT DEFAULT 0",
        "DECLARE no_table CONDITION FOR SQLSTATE '42S02'",
        "DECLARE cur CURSOR FOR SELECT id FROM t",
        "DECLARE CONTINUE HANDLER FOR NOT FOUND, 1062 SET done = 1",
        "SIGNAL SQLSTATE '45000' SET MESSAGE_TEXT = 'bad', MYSQL_ERRNO = 1644",
        "RESIGNAL",
        "GET STACKED DIAGNOSTICS CONDITION 1 @msg = MESSAGE_TEXT, code = MYSQL_ERRNO",
        "GET DIAGNOSTICS @n = NUMBER",
        "FETCH NEXT FROM cur INTO a, b",
        "START TRANSACTION WITH CONSISTENT SNAPSHOT, READ ONLY",
        "BEGIN WORK",
        "COMMIT WORK AND CHAIN NO RELEASE",
        "ROLLBACK AND NO CHAIN RELEASE",
        "ROLLBACK WORK TO SAVEPOINT sp",
        "SAVEPOINT sp",
        "RELEASE SAVEPOINT sp",
        "PREPARE s FROM 'SELECT ?'",
        "PREPARE s FROM @sql",
        "EXECUTE s USING @a, @b",
        "DEALLOCATE PREPARE s",
        "DROP PREPARE s",
    ] {
        round_trip(sql);
    }
}

#[test]
fn test_canonical_spelling() {
    renders_as(
        "select a+1 as x from t where b=2",
        "SELECT a + 1 AS x FROM t WHERE b = 2",
    );
    renders_as("SELECT a FROM t LIMIT 10 OFFSET 5", "SELECT a FROM t LIMIT 5, 10");
    renders_as("SELECT `select` FROM `a``b`", "SELECT `select` FROM `a``b`");
    renders_as("SELECT 'a\\\\b'", "SELECT 'a\\\\b'");
    renders_as("SELECT CURRENT_DATE", "SELECT CURRENT_DATE()");
    renders_as("begin work", "BEGIN WORK");
    renders_as("deallocate s", "DEALLOCATE PREPARE s");
}
