use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Ingredient {
    Table,
    Id,
    Name,
    MeasurementUnit,
}

#[derive(Iden, Clone)]
pub enum Tag {
    Table,
    Id,
    Name,
    Slug,
}

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    AuthorId,
    Name,
    Text,
    CookingTime,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum RecipeTag {
    Table,
    RecipeId,
    TagId,
}

#[derive(Iden, Clone)]
pub enum RecipeIngredient {
    Table,
    Id,
    RecipeId,
    IngredientId,
    Amount,
}

#[derive(Iden, Clone)]
pub enum Cart {
    Table,
    UserId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum CartRecipe {
    Table,
    UserId,
    RecipeId,
    AddedAt,
}
