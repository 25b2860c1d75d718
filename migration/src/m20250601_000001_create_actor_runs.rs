use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActorRuns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActorRuns::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ActorRuns::ActorId).string().not_null())
                    .col(ColumnDef::new(ActorRuns::RunId).string())
                    .col(ColumnDef::new(ActorRuns::DatasetId).string())
                    .col(ColumnDef::new(ActorRuns::Input).json().not_null())
                    .col(ColumnDef::new(ActorRuns::Results).json())
                    .col(ColumnDef::new(ActorRuns::ItemCount).integer().not_null().default(0))
                    .col(ColumnDef::new(ActorRuns::Status).string().not_null())
                    .col(ColumnDef::new(ActorRuns::RunStatus).string())
                    .col(ColumnDef::new(ActorRuns::ErrorMessage).text())
                    .col(
                        ColumnDef::new(ActorRuns::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups go through the platform's run id
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_actor_runs_run_id")
                    .table(ActorRuns::Table)
                    .col(ActorRuns::RunId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActorRuns::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ActorRuns {
    Table,
    Id,
    ActorId,
    RunId,
    DatasetId,
    Input,
    Results,
    ItemCount,
    Status,
    RunStatus,
    ErrorMessage,
    CreatedAt,
}
