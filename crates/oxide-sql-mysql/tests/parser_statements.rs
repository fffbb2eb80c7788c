mod common;

use common::{parse, parse_all, parse_alter_table, parse_create_table, parse_select, parse_show};
use oxide_sql_mysql::ast::{
    AlterSpecification, Block, ColumnKey, CompletionType, Declare, Expr, FromClause, Identifier,
    IndexKind, JoinKind, Limit, LimitValue, QueryExpr, ReferenceAction, Set, SetVariable, Show,
    ShowFilter, TableElement, TableReference, TransactionMode, TypeName, VariableScope,
};
use oxide_sql_mysql::Statement;

#[test]
fn test_select_shape() {
    let select = parse_select(
        "SELECT HIGH_PRIORITY a, COUNT(*) AS n FROM t1 AS x LEFT JOIN t2 ON x.id = t2.id \
         WHERE a > 1 GROUP BY a HAVING n > 2 ORDER BY n DESC LIMIT 10",
    );
    assert!(select.options.high_priority);
    assert_eq!(select.items.len(), 2);
    assert_eq!(select.items[1].alias, Some(Identifier::new("n")));
    let Some(FromClause::Tables(tables)) = &select.from else {
        panic!("expected FROM tables");
    };
    let TableReference::Join(join) = &tables[0] else {
        panic!("expected join");
    };
    assert_eq!(join.kind, JoinKind::Left);
    assert!(select.group_by.is_some());
    assert!(select.having.is_some());
    assert_eq!(
        select.limit,
        Some(Limit {
            offset: None,
            count: LimitValue::Number(10),
        })
    );
}

#[test]
fn test_union_keeps_branch_order() {
    let Statement::Query(QueryExpr::Union(union)) =
        parse("SELECT 1 UNION ALL SELECT 2 UNION SELECT 3 ORDER BY 1")
    else {
        panic!("expected union");
    };
    assert_eq!(union.rest.len(), 2);
    assert!(union.rest[0].all);
    assert!(!union.rest[1].all);
    assert_eq!(union.order_by.len(), 1);
}

#[test]
fn test_parenthesised_unions_inside_queries() {
    let select = parse_select(
        "SELECT * FROM ((SELECT 1) UNION (SELECT 2)) AS d \
         WHERE a IN ((SELECT 1 ORDER BY 1 LIMIT 1) UNION SELECT 3)",
    );
    let Some(FromClause::Tables(tables)) = &select.from else {
        panic!("expected FROM tables");
    };
    let TableReference::Derived { subquery, alias } = &tables[0] else {
        panic!("expected derived table");
    };
    assert_eq!(alias, &Some(Identifier::new("d")));
    assert!(matches!(subquery.as_ref(), QueryExpr::Union(union) if union.rest.len() == 1));

    let Some(Expr::InSubquery { subquery, .. }) = &select.where_clause else {
        panic!("expected IN subquery");
    };
    let QueryExpr::Union(union) = subquery.as_ref() else {
        panic!("expected union");
    };
    assert_eq!(union.first.order_by.len(), 1);
    assert!(union.first.limit.is_some());
    assert!(union.order_by.is_empty());
}

#[test]
fn test_parenthesised_subquery_operand_stays_expression() {
    let select = parse_select("SELECT ((SELECT 1) + 1), a IN ((SELECT 1), 2)");
    assert!(matches!(&select.items[0].expr, Expr::Binary { .. }));
    assert!(matches!(&select.items[1].expr, Expr::InList { list, .. } if list.len() == 2));
}

#[test]
fn test_drop_index_keeps_algorithm_and_lock() {
    let Statement::DropIndex(drop) = parse("DROP INDEX i ON t ALGORITHM = INPLACE LOCK = NONE")
    else {
        panic!("expected DROP INDEX");
    };
    assert_eq!(drop.algorithm, Some(Identifier::new("INPLACE")));
    assert_eq!(drop.lock, Some(Identifier::new("NONE")));
}

#[test]
fn test_create_table_elements() {
    let table = parse_create_table(
        "CREATE TABLE IF NOT EXISTS orders (\
           id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT, \
           customer_id INT NOT NULL REFERENCES customers (id) ON DELETE CASCADE, \
           note TEXT, \
           PRIMARY KEY (id), \
           KEY idx_customer (customer_id), \
           CONSTRAINT fk_c FOREIGN KEY (customer_id) REFERENCES customers (id)\
         ) ENGINE = InnoDB",
    );
    assert!(table.if_not_exists);
    assert_eq!(table.elements.len(), 6);
    let TableElement::Column { name, definition } = &table.elements[0] else {
        panic!("expected column");
    };
    assert_eq!(name.text, "id");
    assert_eq!(definition.data_type.name, TypeName::BigInt);
    assert!(definition.data_type.unsigned);
    assert!(definition.auto_increment);
    let TableElement::Column { definition, .. } = &table.elements[1] else {
        panic!("expected column");
    };
    let reference = definition.reference.as_ref().expect("inline reference");
    assert_eq!(reference.on_delete, Some(ReferenceAction::Cascade));
    assert!(matches!(
        &table.elements[3],
        TableElement::Index(index) if index.kind == IndexKind::Primary && index.name.is_none()
    ));
    assert!(matches!(&table.elements[5], TableElement::ForeignKey(_)));
}

#[test]
fn test_bare_key_attribute_is_primary() {
    let table = parse_create_table("CREATE TABLE t (a INT KEY, b INT UNIQUE)");
    let keys: Vec<_> = table
        .elements
        .iter()
        .map(|element| match element {
            TableElement::Column { definition, .. } => definition.key,
            _ => None,
        })
        .collect();
    assert_eq!(keys, vec![Some(ColumnKey::Primary), Some(ColumnKey::Unique)]);
}

#[test]
fn test_alter_column_positions() {
    let alter = parse_alter_table(
        "ALTER TABLE t ADD COLUMN c INT FIRST, ADD COLUMN d INT AFTER c, MODIFY e TEXT AFTER d",
    );
    assert!(matches!(
        &alter.specifications[0],
        AlterSpecification::AddColumn { first: true, after_column: None, .. }
    ));
    assert!(matches!(
        &alter.specifications[1],
        AlterSpecification::AddColumn { first: false, after_column: Some(after), .. }
            if after.text == "c"
    ));
    assert!(matches!(
        &alter.specifications[2],
        AlterSpecification::ModifyColumn { after_column: Some(after), .. } if after.text == "d"
    ));
}

#[test]
fn test_show_forms() {
    assert_eq!(
        parse_show("SHOW DATABASES LIKE 'app%'"),
        Show::Databases(Some(ShowFilter::Like(String::from("app%"))))
    );
    assert!(matches!(
        parse_show("SHOW SESSION STATUS"),
        Show::Status { scope: Some(VariableScope::Session), filter: None }
    ));
    assert!(matches!(parse_show("SHOW FULL PROCESSLIST"), Show::Processlist { full: true }));
}

#[test]
fn test_set_scope_applies_to_next_variable() {
    let Statement::Set(Set::Variables(variables)) = parse("SET GLOBAL a = 1, b = 2") else {
        panic!("expected SET");
    };
    assert_eq!(
        variables[0],
        SetVariable {
            target: Expr::SystemVariable {
                scope: Some(VariableScope::Global),
                name: String::from("a"),
            },
            value: Expr::integer(1),
        }
    );
    assert_eq!(variables[1].target, Expr::column("b"));
}

#[test]
fn test_begin_disambiguation() {
    assert_eq!(parse("BEGIN"), Statement::Begin { work: false });
    assert_eq!(parse("BEGIN WORK"), Statement::Begin { work: true });
    assert!(matches!(parse("BEGIN END"), Statement::Block(Block { ref statements, .. }) if statements.is_empty()));
    assert!(matches!(parse("BEGIN SELECT 1; END"), Statement::Block(_)));
}

#[test]
fn test_transaction_script() {
    let statements = parse_all(
        "START TRANSACTION READ WRITE; \
         SAVEPOINT before_update; \
         UPDATE accounts SET balance = balance - 10 WHERE id = 1; \
         ROLLBACK TO before_update; \
         COMMIT AND NO CHAIN;",
    );
    assert_eq!(statements.len(), 5);
    assert_eq!(
        statements[0],
        Statement::StartTransaction(vec![TransactionMode::ReadWrite])
    );
    assert!(matches!(
        &statements[3],
        Statement::RollbackToSavepoint { work: false, name } if name.text == "before_update"
    ));
    let Statement::Commit(completion) = &statements[4] else {
        panic!("expected COMMIT");
    };
    assert_eq!(completion.completion, CompletionType::NoChain);
}

#[test]
fn test_procedure_body() {
    let Statement::CreateRoutine(routine) = parse(
        "CREATE PROCEDURE fill(IN n INT) \
         BEGIN \
           DECLARE i INT DEFAULT 0; \
           DECLARE EXIT HANDLER FOR SQLEXCEPTION ROLLBACK; \
           ins: WHILE i < n DO \
             INSERT INTO t VALUES (i); \
             SET i = i + 1; \
           END WHILE ins; \
         END",
    ) else {
        panic!("expected routine");
    };
    let Statement::Block(block) = routine.body.as_ref() else {
        panic!("expected block body");
    };
    assert_eq!(block.statements.len(), 3);
    assert!(matches!(
        block.statements[0],
        Statement::Declare(Declare::Variables { .. })
    ));
    assert!(matches!(
        block.statements[1],
        Statement::Declare(Declare::Handler { .. })
    ));
    let Statement::While(body) = &block.statements[2] else {
        panic!("expected WHILE");
    };
    assert_eq!(body.label, Some(Identifier::new("ins")));
    assert_eq!(body.statements.len(), 2);
}
