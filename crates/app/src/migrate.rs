use clap::ValueEnum;
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr};

/// Schema operations exposed by `savings migrate`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MigrateAction {
    /// Apply every pending migration.
    #[default]
    Up,
    /// Roll back every applied migration.
    Down,
    /// Drop all tables and re-apply every migration.
    Fresh,
    /// Print which migrations are applied.
    Status,
}

pub async fn apply(db: &DatabaseConnection, action: MigrateAction) -> Result<(), DbErr> {
    match action {
        MigrateAction::Up => Migrator::up(db, None).await,
        MigrateAction::Down => Migrator::down(db, None).await,
        MigrateAction::Fresh => Migrator::fresh(db).await,
        MigrateAction::Status => Migrator::status(db).await,
    }
}
