use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len(Character::Name, 250))
                    .col(integer_null(Character::Height))
                    .col(integer_null(Character::Mass))
                    .col(string_len_null(Character::HairColor, 20))
                    .col(string_len_null(Character::SkinColor, 20))
                    .col(string_len_null(Character::EyeColor, 20))
                    .col(string_len_null(Character::BirthYear, 20))
                    .col(string_len_null(Character::Gender, 20))
                    .col(string_len_null(Character::Homeworld, 250))
                    .col(string_len_null(Character::CharacterPic, 250))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    Homeworld,
    CharacterPic,
}
