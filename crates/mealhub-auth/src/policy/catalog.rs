//! The access rule catalog — one rule per (table, operation) pair.
//!
//! Ownership is resolved transitively through the nearest owned ancestor
//! (a `ParentOwner` rule means "caller owns the row in the parent table"),
//! never through an owner id copied onto the child row. The match in
//! [`rule_for`] is exhaustive, so adding a table or operation without
//! deciding its rule fails to compile; a denied pair is an explicit
//! [`AccessRule::Deny`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tables guarded by row-level policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectedTable {
    /// One row per identity; pk is the provider user id.
    Profiles,
    /// Shared, administratively managed catalog.
    Tags,
    /// Owned rows with a public-visibility flag.
    Recipes,
    /// Children of recipes.
    RecipeIngredients,
    /// Join rows between recipes and tags.
    RecipeTags,
    /// Owned rows.
    MealPlans,
    /// Children of meal plans.
    MealPlanItems,
    /// Owned rows.
    ShoppingLists,
    /// Children of shopping lists.
    ShoppingListItems,
}

impl ProtectedTable {
    /// The SQL table name.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Profiles => "profiles",
            Self::Tags => "tags",
            Self::Recipes => "recipes",
            Self::RecipeIngredients => "recipe_ingredients",
            Self::RecipeTags => "recipe_tags",
            Self::MealPlans => "meal_plans",
            Self::MealPlanItems => "meal_plan_items",
            Self::ShoppingLists => "shopping_lists",
            Self::ShoppingListItems => "shopping_list_items",
        }
    }

    /// The owned ancestor a child table inherits its owner from, if any.
    pub fn parent(&self) -> Option<ProtectedTable> {
        match self {
            Self::RecipeIngredients | Self::RecipeTags => Some(Self::Recipes),
            Self::MealPlanItems => Some(Self::MealPlans),
            Self::ShoppingListItems => Some(Self::ShoppingLists),
            Self::Profiles | Self::Tags | Self::Recipes | Self::MealPlans | Self::ShoppingLists => {
                None
            }
        }
    }

    /// Every protected table, for matrix-style iteration.
    pub const ALL: [ProtectedTable; 9] = [
        Self::Profiles,
        Self::Tags,
        Self::Recipes,
        Self::RecipeIngredients,
        Self::RecipeTags,
        Self::MealPlans,
        Self::MealPlanItems,
        Self::ShoppingLists,
        Self::ShoppingListItems,
    ];
}

impl fmt::Display for ProtectedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table_name())
    }
}

/// The four guarded operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Read one or many rows.
    Select,
    /// Create a row.
    Insert,
    /// Partially update a row.
    Update,
    /// Remove a row (with any declared cascades).
    Delete,
}

impl Operation {
    /// Every guarded operation, for matrix-style iteration.
    pub const ALL: [Operation; 4] = [Self::Select, Self::Insert, Self::Update, Self::Delete];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        write!(f, "{s}")
    }
}

/// The predicate a caller must satisfy for a (table, operation) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRule {
    /// Caller id must equal the row's primary key (profiles).
    SelfRow,
    /// Caller id must equal the row's `user_id`. On insert this also pins
    /// the new row's owner field to the caller, so ownership cannot be
    /// spoofed at create time.
    OwnerOnly,
    /// Row is public, or caller id equals the row's `user_id`.
    OwnerOrPublic,
    /// Any authenticated identity qualifies.
    AnyAuthenticated,
    /// Caller must own the row's ancestor in the given table, resolved by
    /// an existence sub-query at access time.
    ParentOwner(ProtectedTable),
    /// The ancestor row is public, or the caller owns it.
    ParentOwnerOrPublic(ProtectedTable),
    /// Nobody qualifies through this path. Used where the original system
    /// defined no allow-rule: absence of a rule is a hard deny, never an
    /// oversight-permit.
    Deny,
}

impl AccessRule {
    /// Whether this rule denies everyone.
    pub fn is_deny(&self) -> bool {
        matches!(self, Self::Deny)
    }
}

/// Look up the access rule for a (table, operation) pair.
///
/// Profile rows are created through a trusted get-or-create path on first
/// authenticated access; the caller-facing insert is denied. Tag catalog
/// writes are administrative and denied for every caller.
pub fn rule_for(table: ProtectedTable, op: Operation) -> AccessRule {
    use AccessRule::*;
    use Operation::*;
    use ProtectedTable::*;

    match (table, op) {
        (Profiles, Select) => SelfRow,
        (Profiles, Update) => SelfRow,
        (Profiles, Insert) => Deny,
        (Profiles, Delete) => Deny,

        (Tags, Select) => AnyAuthenticated,
        (Tags, Insert) => Deny,
        (Tags, Update) => Deny,
        (Tags, Delete) => Deny,

        (Recipes, Select) => OwnerOrPublic,
        (Recipes, Insert) => OwnerOnly,
        (Recipes, Update) => OwnerOnly,
        (Recipes, Delete) => OwnerOnly,

        (RecipeIngredients, Select) => ParentOwnerOrPublic(Recipes),
        (RecipeIngredients, Insert) => ParentOwner(Recipes),
        (RecipeIngredients, Update) => ParentOwner(Recipes),
        (RecipeIngredients, Delete) => ParentOwner(Recipes),

        (RecipeTags, Select) => AnyAuthenticated,
        (RecipeTags, Insert) => ParentOwner(Recipes),
        (RecipeTags, Update) => ParentOwner(Recipes),
        (RecipeTags, Delete) => ParentOwner(Recipes),

        (MealPlans, Select) => OwnerOnly,
        (MealPlans, Insert) => OwnerOnly,
        (MealPlans, Update) => OwnerOnly,
        (MealPlans, Delete) => OwnerOnly,

        (MealPlanItems, Select) => ParentOwner(MealPlans),
        (MealPlanItems, Insert) => ParentOwner(MealPlans),
        (MealPlanItems, Update) => ParentOwner(MealPlans),
        (MealPlanItems, Delete) => ParentOwner(MealPlans),

        (ShoppingLists, Select) => OwnerOnly,
        (ShoppingLists, Insert) => OwnerOnly,
        (ShoppingLists, Update) => OwnerOnly,
        (ShoppingLists, Delete) => OwnerOnly,

        (ShoppingListItems, Select) => ParentOwner(ShoppingLists),
        (ShoppingListItems, Insert) => ParentOwner(ShoppingLists),
        (ShoppingListItems, Update) => ParentOwner(ShoppingLists),
        (ShoppingListItems, Delete) => ParentOwner(ShoppingLists),
    }
}
