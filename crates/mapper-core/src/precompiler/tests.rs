// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::sync::Once;

use rstest::rstest;

use super::{ids::IdBinding, *};
use crate::{
    dialect::{DialectKind, H2Dialect, MySqlDialect, PostgresDialect},
    error::Error,
    metadata::{
        Column, ConditionSpec, EntityBuilder, GeneratedValue, GenerationType, IgnoreCaseType,
        JdbcType, PartType, PersistentProperty, SequenceGenerator
    },
    statement::KeyOrder
};

const USERS: &str = "app::UserRepository";
const LINES: &str = "app::LineRepository";
const PAIRS: &str = "app::PairRepository";
const LOGS: &str = "app::LogRepository";

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn column(name: &str, jdbc_type: JdbcType) -> Column {
    Column::new(name, jdbc_type)
}

fn user() -> EntityBuilder {
    PersistentEntity::builder("app::User", "users")
        .sequence_generator(SequenceGenerator::new("user_gen", "users_seq"))
        .property(
            PersistentProperty::id("id", "i64", column("id", JdbcType::Bigint))
                .generated(GeneratedValue::sequence().generator("user_gen"))
        )
        .property(
            PersistentProperty::basic("name", "String", column("name", JdbcType::Varchar))
                .condition(ConditionSpec::new(PartType::Containing).ignore_case(IgnoreCaseType::Always))
        )
        .property(
            PersistentProperty::basic("age", "i32", column("age", JdbcType::Integer)).condition(
                ConditionSpec::new(PartType::Between).properties(["min_age", "max_age"])
            )
        )
        .property(PersistentProperty::basic(
            "email",
            "String",
            column("email", JdbcType::Varchar)
        ))
}

fn line_key() -> PersistentEntity {
    PersistentEntity::builder("app::LineKey", "")
        .embeddable()
        .property(PersistentProperty::basic(
            "order_id",
            "i64",
            column("order_id", JdbcType::Bigint)
        ))
        .property(PersistentProperty::basic(
            "line_no",
            "i32",
            column("line_no", JdbcType::Integer)
        ))
        .build()
}

fn line() -> PersistentEntity {
    PersistentEntity::builder("app::Line", "lines")
        .property(PersistentProperty::embedded_id("key", "app::LineKey"))
        .property(PersistentProperty::basic("sku", "String", column("sku", JdbcType::Varchar)))
        .build()
}

fn pair() -> PersistentEntity {
    PersistentEntity::builder("app::Pair", "pairs")
        .id_class("app::PairKey")
        .property(PersistentProperty::id("left", "i64", column("left", JdbcType::Bigint)))
        .property(PersistentProperty::id("right", "i64", column("right", JdbcType::Bigint)))
        .property(PersistentProperty::basic(
            "label",
            "String",
            column("label", JdbcType::Varchar)
        ))
        .build()
}

fn log() -> PersistentEntity {
    PersistentEntity::builder("app::Log", "logs")
        .property(PersistentProperty::basic("line", "String", column("line", JdbcType::Varchar)))
        .build()
}

fn context_with(entities: impl IntoIterator<Item = PersistentEntity>) -> MappingContext {
    let mut context = MappingContext::new();
    for entity in entities {
        context.add_entity(entity);
    }
    context
}

fn context() -> MappingContext {
    context_with([user().build(), line_key(), line(), pair(), log()])
}

fn repository(namespace: &str, domain: &str) -> RepositoryInformation {
    RepositoryInformation::new(namespace, domain)
}

fn precompile(
    context: &MappingContext,
    dialect: &dyn Dialect,
    namespace: &str,
    domain: &str
) -> StatementRegistry {
    init_tracing();
    let registry = StatementRegistry::new();
    let repository = repository(namespace, domain);
    Precompiler::new(context, dialect, &registry, &repository)
        .unwrap()
        .precompile()
        .unwrap();
    registry
}

fn body(registry: &StatementRegistry, namespace: &str, id: &str) -> String {
    registry
        .get(namespace, id)
        .unwrap_or_else(|| panic!("{id} not registered"))
        .body()
        .to_string()
}

#[test]
fn unknown_domain_type() {
    let context = context();
    let registry = StatementRegistry::new();
    let repository = repository("app::GhostRepository", "app::Ghost");
    let err = Precompiler::new(&context, &PostgresDialect, &registry, &repository).unwrap_err();
    assert!(matches!(err, Error::UnknownEntity { type_name } if type_name == "app::Ghost"));
}

#[test]
fn simple_id_generates_every_statement_in_order() {
    init_tracing();
    let context = context();
    let registry = StatementRegistry::new();
    let repository = repository(USERS, "app::User");
    let outcome = Precompiler::new(&context, &PostgresDialect, &registry, &repository)
        .unwrap()
        .precompile()
        .unwrap();
    let ids: Vec<_> = outcome.statements().iter().map(MappedStatement::id).collect();
    assert_eq!(
        ids,
        [
            RESULT_MAP,
            BASE_COLUMN_LIST,
            INSERT_SELECTIVE,
            INSERT,
            UPDATE_SELECTIVE_BY_ID,
            UPDATE_SELECTIVE,
            UPDATE_BY_ID,
            UPDATE,
            DELETE_BY_ID,
            DELETE_BY_IDS,
            DELETE_ALL,
            GET_BY_ID,
            FIND_BY_PAGER,
            FIND,
            COUNT_ALL,
            COUNT
        ]
    );
    assert_eq!(outcome.namespace(), USERS);
    assert_eq!(registry.len(), 16);
}

#[test]
fn simple_id_result_map_and_columns() {
    let registry = precompile(&context(), &PostgresDialect, USERS, "app::User");
    let result_map = registry.get(USERS, RESULT_MAP).unwrap();
    assert_eq!(
        result_map.render(),
        "<resultMap id=\"__result_map\" type=\"app::User\"><id property=\"id\" column=\"id\" \
         jdbcType=\"BIGINT\"/><result property=\"name\" column=\"name\" \
         jdbcType=\"VARCHAR\"/><result property=\"age\" column=\"age\" \
         jdbcType=\"INTEGER\"/><result property=\"email\" column=\"email\" \
         jdbcType=\"VARCHAR\"/></resultMap>"
    );
    assert_eq!(body(&registry, USERS, BASE_COLUMN_LIST), "id,name,age,email");
}

#[test]
fn simple_id_insert_with_sequence() {
    let registry = precompile(&context(), &PostgresDialect, USERS, "app::User");
    let insert = registry.get(USERS, INSERT).unwrap();
    assert_eq!(
        insert.render(),
        "<insert id=\"__insert\" parameterType=\"app::User\" keyProperty=\"id\" keyColumn=\"id\" \
         useGeneratedKeys=\"true\"><selectKey keyProperty=\"id\" keyColumn=\"id\" \
         order=\"BEFORE\" resultType=\"i64\">select nextval ('users_seq')</selectKey>insert into \
         users (id,name,age,email) values \
         (#{id,jdbcType=BIGINT},#{name,jdbcType=VARCHAR},#{age,jdbcType=INTEGER},#{email,\
         jdbcType=VARCHAR})</insert>"
    );
    assert_eq!(insert.key().and_then(|k| k.order), Some(KeyOrder::Before));
}

#[test]
fn insert_selective_guards_every_column() {
    let registry = precompile(&context(), &PostgresDialect, USERS, "app::User");
    let sql = body(&registry, USERS, INSERT_SELECTIVE);
    assert!(sql.ends_with(
        "insert into users <trim prefix=\"(\" suffix=\")\" suffixOverrides=\",\"><if test=\"id \
         != null\">id,</if><if test=\"name != null\">name,</if><if test=\"age != \
         null\">age,</if><if test=\"email != null\">email,</if></trim> <trim prefix=\"values(\" \
         suffix=\")\" suffixOverrides=\",\"><if test=\"id != \
         null\">#{id,jdbcType=BIGINT},</if><if test=\"name != \
         null\">#{name,jdbcType=VARCHAR},</if><if test=\"age != \
         null\">#{age,jdbcType=INTEGER},</if><if test=\"email != \
         null\">#{email,jdbcType=VARCHAR},</if></trim>"
    ));
}

#[test]
fn simple_id_updates() {
    let registry = precompile(&context(), &PostgresDialect, USERS, "app::User");
    assert_eq!(
        body(&registry, USERS, UPDATE_BY_ID),
        "update users <set>name=#{__entity.name,jdbcType=VARCHAR},age=#{__entity.age,\
         jdbcType=INTEGER},email=#{__entity.email,jdbcType=VARCHAR}</set> where id = \
         #{__id,jdbcType=BIGINT}"
    );
    assert_eq!(
        body(&registry, USERS, UPDATE_SELECTIVE),
        "update users <set><if test=\"__entity.name != \
         null\">name=#{__entity.name,jdbcType=VARCHAR},</if><if test=\"__entity.age != \
         null\">age=#{__entity.age,jdbcType=INTEGER},</if><if test=\"__entity.email != \
         null\">email=#{__entity.email,jdbcType=VARCHAR},</if></set> where id = \
         #{__entity.id,jdbcType=BIGINT}"
    );
    assert!(body(&registry, USERS, UPDATE).ends_with("where id = #{__entity.id,jdbcType=BIGINT}"));
    assert!(
        body(&registry, USERS, UPDATE_SELECTIVE_BY_ID).ends_with("where id = #{__id,jdbcType=BIGINT}")
    );
}

#[test]
fn simple_id_deletes_and_get() {
    let registry = precompile(&context(), &PostgresDialect, USERS, "app::User");
    let delete = registry.get(USERS, DELETE_BY_ID).unwrap();
    assert_eq!(delete.parameter_type(), Some("i64"));
    assert_eq!(delete.body(), "delete from users where id = #{id,jdbcType=BIGINT}");
    assert_eq!(
        body(&registry, USERS, DELETE_BY_IDS),
        "delete from users where id in <foreach collection=\"__ids\" item=\"item\" \
         index=\"index\" open=\"(\" separator=\",\" close=\")\">#{item}</foreach>"
    );
    assert_eq!(body(&registry, USERS, DELETE_ALL), "delete from users");

    let get = registry.get(USERS, GET_BY_ID).unwrap();
    assert_eq!(
        get.render(),
        "<select id=\"__get_by_id\" parameterType=\"i64\" resultMap=\"__result_map\">select * \
         from users where id = #{id,jdbcType=BIGINT}</select>"
    );
}

/// The `<where>` clause of `sql` as rendered with every `<if>` guard true:
/// guards dropped, the first leading `and ` stripped, `where ` prefixed.
fn active_where(sql: &str) -> String {
    let start = sql.find("<where>").unwrap() + "<where>".len();
    let end = sql.find("</where>").unwrap();
    let mut inner = sql[start..end].replace("</if>", "");
    while let Some(open) = inner.find("<if test=\"") {
        let close = open + inner[open..].find("\">").unwrap() + 2;
        inner.replace_range(open..close, "");
    }
    let inner = inner.trim_start();
    let inner = inner.strip_prefix("and ").unwrap_or(inner);
    format!("where {inner}")
}

#[test]
fn find_combines_ids_conditions_and_sort() {
    let registry = precompile(&context(), &PostgresDialect, USERS, "app::User");
    let find = body(&registry, USERS, FIND);
    assert!(find.starts_with(
        "select * from users <where><if test=\"__ids != null\"> and id in <foreach \
         collection=\"__ids\""
    ));
    assert!(find.contains(
        "</foreach></if><if test=\"__condition != null\"><if test=\"__condition.name != \
         null\"> and lower(name)  like  <bind name=\"__bind_0_name\" value=\"'%' + \
         __condition.name + '%'\" />lower(#{__bind_0_name})</if><if test=\"__condition.min_age \
         != null and __condition.max_age != null\"> and age  between  #{__condition.min_age} and \
         #{__condition.max_age}</if></if></where>"
    ));
    assert!(find.ends_with(
        "<if test=\"__sort != null\"><bind name=\"__columnsMap\" \
         value='#{&apos;id&apos;:&apos;id&apos;,&apos;name&apos;:&apos;name&apos;,&apos;age&\
         apos;:&apos;age&apos;,&apos;email&apos;:&apos;email&apos;}'/> order by <foreach \
         collection=\"__sort\" item=\"item\" index=\"idx\" open=\"\" close=\"\" \
         separator=\",\"><if test=\"item.ignoreCase\">lower(</if>${__columnsMap[item.property]}<if \
         test=\"item.ignoreCase\">)</if> ${item.direction}</foreach></if>"
    ));
    assert_eq!(
        registry.get(USERS, FIND).unwrap().result_map(),
        Some(RESULT_MAP)
    );
}

#[test]
fn find_conjoins_ids_filter_with_conditions() {
    let registry = precompile(&context(), &PostgresDialect, USERS, "app::User");
    let find = body(&registry, USERS, FIND);
    assert!(!find.contains("prefixOverrides"));
    assert_eq!(
        active_where(&find),
        "where id in <foreach collection=\"__ids\" item=\"item\" index=\"index\" open=\"(\" \
         separator=\",\" close=\")\">#{item}</foreach> and lower(name)  like  <bind \
         name=\"__bind_0_name\" value=\"'%' + __condition.name + '%'\" \
         />lower(#{__bind_0_name}) and age  between  #{__condition.min_age} and \
         #{__condition.max_age}"
    );
    let paged = body(&registry, USERS, FIND_BY_PAGER);
    assert_eq!(active_where(&paged), active_where(&find));
}

#[test]
fn composite_ids_filter_conjoins_with_conditions() {
    let entity = PersistentEntity::builder("app::Pair", "pairs")
        .id_class("app::PairKey")
        .property(PersistentProperty::id("left", "i64", column("left", JdbcType::Bigint)))
        .property(PersistentProperty::id("right", "i64", column("right", JdbcType::Bigint)))
        .property(
            PersistentProperty::basic("label", "String", column("label", JdbcType::Varchar))
                .condition(ConditionSpec::new(PartType::IsNotNull))
        )
        .build();
    let registry = precompile(&context_with([entity]), &PostgresDialect, PAIRS, "app::Pair");
    assert_eq!(
        active_where(&body(&registry, PAIRS, FIND)),
        "where <foreach collection=\"__ids\" item=\"item\" index=\"index\" open=\"(\" \
         separator=\") or (\" close=\")\">left = #{item.left} and right = \
         #{item.right}</foreach> and label  is not null"
    );
}

#[rstest]
#[case(DialectKind::Postgres, " limit #{__pageSize} offset #{__offset}")]
#[case(DialectKind::MySql, " limit #{__offset}, #{__pageSize}")]
#[case(DialectKind::H2, " limit #{__pageSize} offset #{__offset}")]
fn find_by_pager_uses_dialect_paging(#[case] kind: DialectKind, #[case] suffix: &str) {
    let entity = PersistentEntity::builder("app::Log", "logs")
        .property(PersistentProperty::id("id", "i64", column("id", JdbcType::Bigint)))
        .build();
    let registry = precompile(&context_with([entity]), kind.dialect(), LOGS, "app::Log");
    let paged = body(&registry, LOGS, FIND_BY_PAGER);
    let find = body(&registry, LOGS, FIND);
    assert_eq!(paged, format!("{find}{suffix}"));
}

#[test]
fn oracle_paging_wraps_find() {
    let registry = precompile(&context(), DialectKind::Oracle.dialect(), LOGS, "app::Log");
    let paged = body(&registry, LOGS, FIND_BY_PAGER);
    assert!(paged.starts_with("select * from ( select row_.*, rownum rownum_ from ( select * from logs"));
}

#[test]
fn counts() {
    let registry = precompile(&context(), &PostgresDialect, USERS, "app::User");
    let count_all = registry.get(USERS, COUNT_ALL).unwrap();
    assert_eq!(
        count_all.render(),
        "<select id=\"__count_all\" resultType=\"long\">select count(*) from users</select>"
    );
    let count = body(&registry, USERS, COUNT);
    assert!(count.starts_with("select count(*) from users <where><if test=\"__condition != null\">"));
    assert_eq!(count.matches("<if test=\"__condition != null\">").count(), 1);
    assert!(count.ends_with("</if></if></where>"));
    assert!(!count.contains("prefixOverrides"));
    assert_eq!(
        active_where(&count),
        "where lower(name)  like  <bind name=\"__bind_0_name\" value=\"'%' + __condition.name + \
         '%'\" />lower(#{__bind_0_name}) and age  between  #{__condition.min_age} and \
         #{__condition.max_age}"
    );
}

#[test]
fn embedded_id_statements() {
    let registry = precompile(&context(), &PostgresDialect, LINES, "app::Line");

    assert_eq!(
        body(&registry, LINES, RESULT_MAP),
        "<result property=\"sku\" column=\"sku\" jdbcType=\"VARCHAR\"/><association \
         property=\"key\"><id property=\"order_id\" column=\"order_id\" \
         jdbcType=\"BIGINT\"/><id property=\"line_no\" column=\"line_no\" \
         jdbcType=\"INTEGER\"/></association>"
    );
    assert_eq!(body(&registry, LINES, BASE_COLUMN_LIST), "order_id,line_no,sku");

    let get = registry.get(LINES, GET_BY_ID).unwrap();
    assert_eq!(get.parameter_type(), Some("app::LineKey"));
    assert_eq!(
        get.body(),
        "select * from lines where order_id = #{order_id,jdbcType=BIGINT} and line_no = \
         #{line_no,jdbcType=INTEGER}"
    );
    assert_eq!(
        body(&registry, LINES, UPDATE_BY_ID),
        "update lines <set>sku=#{__entity.sku,jdbcType=VARCHAR}</set> where order_id = \
         #{__id.order_id,jdbcType=BIGINT} and line_no = #{__id.line_no,jdbcType=INTEGER}"
    );
    assert!(body(&registry, LINES, UPDATE).ends_with(
        "where order_id = #{__entity.key.order_id,jdbcType=BIGINT} and line_no = \
         #{__entity.key.line_no,jdbcType=INTEGER}"
    ));
    assert_eq!(
        body(&registry, LINES, DELETE_BY_IDS),
        "delete from lines where <foreach collection=\"__ids\" item=\"item\" index=\"index\" \
         open=\"(\" separator=\") or (\" close=\")\">order_id = #{item.order_id} and line_no = \
         #{item.line_no}</foreach>"
    );

    let insert = registry.get(LINES, INSERT).unwrap();
    assert!(insert.key().is_none());
    assert_eq!(
        insert.body(),
        "insert into lines (order_id,line_no,sku) values \
         (#{key.order_id,jdbcType=BIGINT},#{key.line_no,jdbcType=INTEGER},#{sku,\
         jdbcType=VARCHAR})"
    );
}

#[test]
fn composite_id_statements() {
    let registry = precompile(&context(), &PostgresDialect, PAIRS, "app::Pair");

    let delete = registry.get(PAIRS, DELETE_BY_ID).unwrap();
    assert_eq!(delete.parameter_type(), Some("app::PairKey"));
    assert_eq!(
        delete.body(),
        "delete from pairs where left = #{left,jdbcType=BIGINT} and right = \
         #{right,jdbcType=BIGINT}"
    );
    assert_eq!(
        body(&registry, PAIRS, UPDATE_SELECTIVE_BY_ID),
        "update pairs <set><if test=\"__entity.label != \
         null\">label=#{__entity.label,jdbcType=VARCHAR},</if></set> where left = \
         #{__id.left,jdbcType=BIGINT} and right = #{__id.right,jdbcType=BIGINT}"
    );
    assert!(registry.get(PAIRS, INSERT).unwrap().key().is_none());
}

#[test]
fn entity_without_id_skips_key_statements() {
    init_tracing();
    let context = context();
    let registry = StatementRegistry::new();
    let repository = repository(LOGS, "app::Log");
    let outcome = Precompiler::new(&context, &PostgresDialect, &registry, &repository)
        .unwrap()
        .precompile()
        .unwrap();
    let ids: Vec<_> = outcome.statements().iter().map(MappedStatement::id).collect();
    assert_eq!(
        ids,
        [
            RESULT_MAP,
            BASE_COLUMN_LIST,
            INSERT_SELECTIVE,
            INSERT,
            DELETE_ALL,
            FIND_BY_PAGER,
            FIND,
            COUNT_ALL,
            COUNT
        ]
    );
    assert_eq!(
        body(&registry, LOGS, FIND),
        format!(
            "select * from logs <where><if test=\"__condition != null\"></if></where> {}",
            Precompiler::new(&context, &PostgresDialect, &StatementRegistry::new(), &repository)
                .unwrap()
                .order_by_segment()
                .unwrap()
        )
    );
    assert!(registry.get(LOGS, INSERT).unwrap().key().is_none());
}

#[test]
fn id_conditions_reject_entity_without_id() {
    let context = context();
    let registry = StatementRegistry::new();
    let repository = repository(LOGS, "app::Log");
    let precompiler = Precompiler::new(&context, &PostgresDialect, &registry, &repository).unwrap();
    for binding in [IdBinding::Parameter, IdBinding::Id, IdBinding::Entity] {
        let err = precompiler.id_condition(binding).unwrap_err();
        assert!(matches!(err, Error::MissingIdProperty { ref entity } if entity == "app::Log"));
    }
    assert!(matches!(
        precompiler.ids_condition().unwrap_err(),
        Error::MissingIdProperty { .. }
    ));
    assert_eq!(precompiler.guarded_ids_condition().unwrap(), "");
}

#[rstest]
#[case(GeneratedValue::identity(), &MySqlDialect as &dyn Dialect, "select last_insert_id()", KeyOrder::After)]
#[case(GeneratedValue::identity(), &PostgresDialect as &dyn Dialect, "select currval('users_id_seq')", KeyOrder::After)]
#[case(GeneratedValue::new(GenerationType::Auto), &MySqlDialect as &dyn Dialect, "select last_insert_id()", KeyOrder::After)]
#[case(GeneratedValue::new(GenerationType::Auto), &H2Dialect as &dyn Dialect, "call next value for seq_mapper_derive", KeyOrder::Before)]
#[case(GeneratedValue::sequence(), &PostgresDialect as &dyn Dialect, "select nextval ('seq_mapper_derive')", KeyOrder::Before)]
fn key_generation(
    #[case] generated: GeneratedValue,
    #[case] dialect: &dyn Dialect,
    #[case] sql: &str,
    #[case] order: KeyOrder
) {
    let entity = PersistentEntity::builder("app::User", "users")
        .property(PersistentProperty::id("id", "i64", column("id", JdbcType::Bigint)).generated(generated))
        .build();
    let registry = precompile(&context_with([entity]), dialect, USERS, "app::User");
    let insert = registry.get(USERS, INSERT_SELECTIVE).unwrap();
    let key = insert.key().unwrap();
    assert!(key.use_generated_keys);
    assert_eq!(key.order, Some(order));
    assert!(
        insert
            .body()
            .starts_with(&format!("<selectKey keyProperty=\"id\" keyColumn=\"id\" order=\"{}\"", order.as_str())),
        "{}",
        insert.body()
    );
    assert!(insert.body().contains(&format!(">{sql}</selectKey>")));
}

#[test]
fn id_without_generator_records_key_only() {
    let entity = PersistentEntity::builder("app::User", "users")
        .property(PersistentProperty::id("id", "i64", column("id", JdbcType::Bigint)))
        .build();
    let registry = precompile(&context_with([entity]), &PostgresDialect, USERS, "app::User");
    let insert = registry.get(USERS, INSERT).unwrap();
    assert_eq!(
        insert.render(),
        "<insert id=\"__insert\" parameterType=\"app::User\" keyProperty=\"id\" keyColumn=\"id\" \
         useGeneratedKeys=\"false\">insert into users (id) values \
         (#{id,jdbcType=BIGINT})</insert>"
    );
}

#[test]
fn with_config_uses_dialect_and_default_sequence() {
    init_tracing();
    let entity = PersistentEntity::builder("app::User", "users")
        .property(
            PersistentProperty::id("id", "i64", column("id", JdbcType::Bigint))
                .generated(GeneratedValue::sequence())
        )
        .build();
    let context = context_with([entity]);
    let config = PrecompilerConfig::from_json_str(
        r#"{ "dialect": "h2", "default_sequence_name": "custom_seq" }"#
    )
    .unwrap();
    let registry = StatementRegistry::new();
    let repository = repository(USERS, "app::User");
    Precompiler::with_config(&context, &config, &registry, &repository)
        .unwrap()
        .precompile()
        .unwrap();
    assert!(body(&registry, USERS, INSERT).contains(">call next value for custom_seq</selectKey>"));
}

#[test]
fn precompile_is_idempotent() {
    init_tracing();
    let context = context();
    let registry = StatementRegistry::new();
    let repository = repository(USERS, "app::User");
    let precompiler = Precompiler::new(&context, &PostgresDialect, &registry, &repository).unwrap();
    let first = precompiler.precompile().unwrap();
    let snapshot: Vec<_> = registry.namespace(USERS);
    let second = precompiler.precompile().unwrap();
    assert_eq!(first.statements().len(), 16);
    assert!(second.statements().is_empty());
    assert_eq!(registry.namespace(USERS), snapshot);
}

#[test]
fn precompile_is_deterministic() {
    let context = context();
    let repository = repository(USERS, "app::User");
    let render = || {
        let registry = StatementRegistry::new();
        Precompiler::new(&context, &PostgresDialect, &registry, &repository)
            .unwrap()
            .precompile()
            .unwrap()
    };
    assert_eq!(render(), render());
    assert_eq!(render().document(), render().document());
}

#[test]
fn user_statements_are_preserved() {
    init_tracing();
    let context = context();
    let registry = StatementRegistry::new();
    let custom = MappedStatement::new(
        StatementKind::Select,
        USERS,
        FIND,
        "select * from users where active"
    );
    assert!(registry.register(custom));
    let repository = repository(USERS, "app::User");
    let outcome = Precompiler::new(&context, &PostgresDialect, &registry, &repository)
        .unwrap()
        .precompile()
        .unwrap();
    assert_eq!(outcome.statements().len(), 15);
    assert!(outcome.statements().iter().all(|s| s.id() != FIND));
    assert_eq!(body(&registry, USERS, FIND), "select * from users where active");
}

#[test]
fn add_operations_do_not_register() {
    let context = context();
    let registry = StatementRegistry::new();
    let repository = repository(USERS, "app::User");
    let precompiler = Precompiler::new(&context, &PostgresDialect, &registry, &repository).unwrap();
    assert!(precompiler.add_delete_all_statement().unwrap().is_some());
    assert!(registry.is_empty());
}

#[test]
fn quoted_table_with_schema() {
    let entity = PersistentEntity::builder("app::User", "user")
        .schema("core")
        .quoted_table()
        .property(PersistentProperty::id("id", "i64", column("id", JdbcType::Bigint)))
        .build();
    let registry = precompile(&context_with([entity]), &MySqlDialect, USERS, "app::User");
    assert_eq!(body(&registry, USERS, DELETE_ALL), "delete from core.`user`");
}

#[test]
fn unsupported_strategy_leaves_registry_untouched() {
    let entity = PersistentEntity::builder("app::User", "users")
        .property(
            PersistentProperty::id("id", "i64", column("id", JdbcType::Bigint))
                .generated(GeneratedValue::new(GenerationType::Table))
        )
        .build();
    let context = context_with([entity]);
    let registry = StatementRegistry::new();
    let repository = repository(USERS, "app::User");
    let err = Precompiler::new(&context, &PostgresDialect, &registry, &repository)
        .unwrap()
        .precompile()
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedGenerationStrategy { .. }));
    assert!(err.is_configuration());
    assert!(registry.is_empty());
}

#[test]
fn condition_arity_error_names_property() {
    let entity = PersistentEntity::builder("app::User", "users")
        .property(
            PersistentProperty::basic("age", "i32", column("age", JdbcType::Integer))
                .condition(ConditionSpec::new(PartType::Between).properties(["min_age"]))
        )
        .build();
    let context = context_with([entity]);
    let registry = StatementRegistry::new();
    let repository = repository(USERS, "app::User");
    let err = Precompiler::new(&context, &PostgresDialect, &registry, &repository)
        .unwrap()
        .precompile()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::ConditionArity { ref property, expected: 2, actual: 1, .. } if property == "age"
    ));
    assert!(registry.is_empty());
}

#[test]
fn example_statements() {
    let entity = user().example().example_companion("app::UserExample").build();
    let context = context_with([entity]);
    let registry = StatementRegistry::new();
    let repository = repository(USERS, "app::User").with_example_query(true);
    let outcome = Precompiler::new(&context, &PostgresDialect, &registry, &repository)
        .unwrap()
        .precompile()
        .unwrap();
    assert_eq!(outcome.statements().len(), 18);

    let clause = body(&registry, USERS, EXAMPLE_WHERE_CLAUSE);
    assert!(clause.starts_with("<where><foreach collection=\"oredCriteria\" item=\"criteria\" separator=\"or\">"));
    assert!(clause.contains("<when test=\"criterion.listValue\"> and ${criterion.condition}"));

    let find = registry.get(USERS, FIND_BY_EXAMPLE).unwrap();
    assert_eq!(
        find.render(),
        "<select id=\"__find_by_example\" parameterType=\"app::UserExample\" \
         resultMap=\"__result_map\">select <if test=\"distinct\">distinct</if> <include \
         refid=\"__base_column_list\"/> from users <if test=\"_parameter != null\"><include \
         refid=\"__example_where_clause\"/></if><if test=\"orderByClause != null\"> order by \
         ${orderByClause} </if></select>"
    );
}

#[test]
fn example_repository_requires_marker() {
    let context = context_with([user().build()]);
    let registry = StatementRegistry::new();
    let repository = repository(USERS, "app::User").with_example_query(true);
    let err = Precompiler::new(&context, &PostgresDialect, &registry, &repository)
        .unwrap()
        .precompile()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "the repository app::UserRepository supports example queries, but could not find the \
         example marker on the entity: app::User"
    );
    assert!(registry.is_empty());
}

#[test]
fn example_repository_requires_companion() {
    let context = context_with([user().example().build()]);
    let registry = StatementRegistry::new();
    let repository = repository(USERS, "app::User").with_example_query(true);
    let err = Precompiler::new(&context, &PostgresDialect, &registry, &repository)
        .unwrap()
        .precompile()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingExampleCompanion { ref companion, .. } if companion == "app::UserExample"
    ));
    assert!(registry.is_empty());
}

#[test]
fn marker_without_example_repository_is_ignored() {
    let entity = user().example().build();
    let registry = precompile(&context_with([entity]), &PostgresDialect, USERS, "app::User");
    assert!(!registry.contains(USERS, FIND_BY_EXAMPLE));
    assert!(!registry.contains(USERS, EXAMPLE_WHERE_CLAUSE));
}

#[test]
fn document_wraps_statements() {
    let registry = StatementRegistry::new();
    let context = context();
    let repository = repository(LOGS, "app::Log");
    let outcome = Precompiler::new(&context, &PostgresDialect, &registry, &repository)
        .unwrap()
        .precompile()
        .unwrap();
    let document = outcome.document();
    assert!(document.starts_with(
        "<mapper namespace=\"app::LogRepository\"><resultMap id=\"__result_map\" \
         type=\"app::Log\"><result property=\"line\" column=\"line\" \
         jdbcType=\"VARCHAR\"/></resultMap><sql id=\"__base_column_list\">line</sql>"
    ));
    assert!(document.ends_with("</select></mapper>"));
}
