use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_validator::ast;
use libgraphql_validator::schema::Schema;
use libgraphql_validator::schema::SchemaBuilder;
use libgraphql_validator::validation::default_rules;
use libgraphql_validator::validation::validate;

const STARWARS_SCHEMA: &str = r#"
    type Query {
        hero(episode: Episode): Character
        human(id: ID!): Human
        droid(id: ID!): Droid
        search(text: String): [SearchResult]
    }

    enum Episode { NEWHOPE EMPIRE JEDI }

    interface Character {
        id: ID!
        name: String!
        friends: [Character]
        appearsIn: [Episode]!
    }

    type Human implements Character {
        id: ID!
        name: String!
        friends: [Character]
        appearsIn: [Episode]!
        homePlanet: String
        height: Float
    }

    type Droid implements Character {
        id: ID!
        name: String!
        friends: [Character]
        appearsIn: [Episode]!
        primaryFunction: String
    }

    union SearchResult = Human | Droid
"#;

const VALID_QUERY: &str = r#"
    query HeroAndFriends {
        hero(episode: JEDI) {
            __typename
            name
            friends {
                name
                ... on Human { homePlanet height }
                ... on Droid { primaryFunction }
                ...characterFields
            }
        }
        search(text: "r2") {
            ... on Droid { name primaryFunction }
        }
    }

    fragment characterFields on Character {
        id
        appearsIn
    }
"#;

const INVALID_QUERY: &str = r#"
    {
        hero {
            nmae
            homePlanet
            friends { nam primaryFunctoin }
        }
        search(text: "r2") { name }
    }
"#;

// ─── Group 1: Rule Engine ─────────────────────────────────

fn validate_starwars(c: &mut Criterion) {
    let schema = SchemaBuilder::from_str(None, STARWARS_SCHEMA)
        .unwrap()
        .build()
        .unwrap();
    let rules = default_rules();
    let mut group = c.benchmark_group("validate_starwars");

    for (label, source) in [("valid", VALID_QUERY), ("invalid", INVALID_QUERY)] {
        let document = ast::operation::parse(source).unwrap();
        group.bench_function(label, |b| {
            b.iter(|| black_box(validate(&document, &schema, &rules)))
        });
    }

    group.finish();
}

// ─── Group 2: Wide Synthetic Schemas ──────────────────────

/// A `Query` type with `width` object-typed fields, each object carrying
/// `width` scalar fields.
fn synthetic_schema(width: usize) -> Schema {
    let mut source = String::from("type Query {\n");
    for i in 0..width {
        source.push_str(&format!("  obj{i}: Object{i}\n"));
    }
    source.push_str("}\n");
    for i in 0..width {
        source.push_str(&format!("type Object{i} {{\n"));
        for j in 0..width {
            source.push_str(&format!("  field{j}: Int\n"));
        }
        source.push_str("}\n");
    }

    SchemaBuilder::from_str(None, source).unwrap().build().unwrap()
}

fn synthetic_query(width: usize) -> ast::operation::Document {
    let mut source = String::from("{\n");
    for i in 0..width {
        source.push_str(&format!("  obj{i} {{ field0 fiedl{i} }}\n"));
    }
    source.push_str("}\n");
    ast::operation::parse(&source).unwrap()
}

fn validate_wide(c: &mut Criterion) {
    let rules = default_rules();
    let mut group = c.benchmark_group("validate_wide");

    for width in [10, 50, 200] {
        let schema = synthetic_schema(width);
        let document = synthetic_query(width);
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(width),
            &document,
            |b, document| b.iter(|| black_box(validate(document, &schema, &rules))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    validate_starwars,
    validate_wide,
);
criterion_main!(benches);
