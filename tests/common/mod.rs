#![allow(dead_code)]

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use member_search::db::{ConnectionOptions, DbPool, QueryLog};
use member_search::domain::member::NewMember;
use member_search::domain::team::{NewTeam, Team};
use member_search::domain::types::{Age, TeamName};
use member_search::repository::{DieselRepository, MemberWriter, TeamWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database in a temporary directory, removed on drop.
///
/// The pool holds a single connection and skips the checkout ping, so
/// [`TestDb::query_log`] counts exactly the statements issued by repository calls.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
    query_log: QueryLog,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let database_url = path.to_str().expect("utf-8 temp path").to_string();

        let query_log = QueryLog::new();
        let options = ConnectionOptions {
            query_log: Some(query_log.clone()),
            ..ConnectionOptions::default()
        };
        let pool = Pool::builder()
            .max_size(1)
            .test_on_check_out(false)
            .connection_customizer(Box::new(options))
            .build(ConnectionManager::<SqliteConnection>::new(database_url))
            .expect("build pool");

        {
            let mut pooled = pool.get().expect("get connection");
            let conn: &mut SqliteConnection = &mut pooled;
            conn.run_pending_migrations(MIGRATIONS)
                .expect("run migrations");
        }

        Self {
            _dir: dir,
            pool,
            query_log,
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }

    pub fn query_log(&self) -> &QueryLog {
        &self.query_log
    }
}

pub fn age(value: i32) -> Age {
    Age::new(value).expect("valid age")
}

/// Creates teamA (member1 aged 10, member2 aged 20) and teamB (member3 aged
/// 30, member4 aged 40).
pub fn seed_members(repo: &DieselRepository) -> (Team, Team) {
    let team_a = repo
        .create_team(&NewTeam::new(TeamName::new("teamA").expect("valid name")))
        .expect("create teamA");
    let team_b = repo
        .create_team(&NewTeam::new(TeamName::new("teamB").expect("valid name")))
        .expect("create teamB");

    let members = [
        NewMember::new("member1", age(10), Some(team_a.id)),
        NewMember::new("member2", age(20), Some(team_a.id)),
        NewMember::new("member3", age(30), Some(team_b.id)),
        NewMember::new("member4", age(40), Some(team_b.id)),
    ];
    assert_eq!(repo.create_members(&members).expect("create members"), 4);

    (team_a, team_b)
}
