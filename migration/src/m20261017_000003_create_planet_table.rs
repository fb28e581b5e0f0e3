use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len(Planet::Name, 250))
                    .col(integer_null(Planet::Diameter))
                    .col(integer_null(Planet::RotationPeriod))
                    .col(integer_null(Planet::OrbitalPeriod))
                    .col(string_len_null(Planet::Gravity, 50))
                    .col(big_integer_null(Planet::Population))
                    .col(string_len_null(Planet::Climate, 100))
                    .col(string_len_null(Planet::Terrain, 100))
                    .col(string_len_null(Planet::SurfaceWater, 20))
                    .col(string_len_null(Planet::PlanetPic, 250))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Diameter,
    RotationPeriod,
    OrbitalPeriod,
    Gravity,
    Population,
    Climate,
    Terrain,
    SurfaceWater,
    PlanetPic,
}
