//! `SeaORM` entity definitions.

pub mod budgets;
pub mod categories;
pub mod transactions;
pub mod users;

pub mod prelude {
    //! Entity re-exports.
    pub use super::budgets::Entity as Budgets;
    pub use super::categories::Entity as Categories;
    pub use super::transactions::Entity as Transactions;
    pub use super::users::Entity as Users;
}
