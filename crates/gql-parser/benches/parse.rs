use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gql_parser::{parse, ParseOptions, Source};

const SCHEMA: &str = r#"
schema {
  query: Query
  mutation: Mutation
}

type Query {
  node(id: ID!): Node
  nodes(ids: [ID!]!): [Node]!
  me: User
}

interface Node {
  id: ID!
}

type User implements Node {
  id: ID!
  name: String!
  friends(first: Int, after: String): FriendConnection!
}

type FriendConnection {
  edges: [FriendEdge]
  pageInfo: PageInfo!
}

type FriendEdge {
  cursor: String!
  node: User
}

type PageInfo {
  hasNextPage: Boolean!
  endCursor: String
}

enum Role {
  ADMIN
  MEMBER
  GUEST
}

union SearchResult = User | FriendConnection

input UserFilter {
  nameContains: String
  role: Role
}

type Mutation {
  updateUser(id: ID!, filter: UserFilter): User
}
"#;

const QUERY: &str = r#"
query FetchUser($id: ID!, $first: Int = 10) {
  node(id: $id) {
    ... on User {
      id
      name
      friends(first: $first) {
        edges {
          cursor
          node {
            id
            name
          }
        }
        pageInfo {
          hasNextPage
          endCursor
        }
      }
    }
  }
}
"#;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (label, body) in [("schema", SCHEMA), ("query", QUERY)] {
        let source = Source::new(label, body);
        group.bench_with_input(BenchmarkId::from_parameter(label), &source, |b, source| {
            b.iter(|| parse(source, ParseOptions::default()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
