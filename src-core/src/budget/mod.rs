pub mod budget_model;
pub mod budget_service;

pub use budget_model::{
    BudgetItem, BudgetItemUpdate, Category, NewBudgetItem, NewSubItem, Period, SubItem,
    SubItemUpdate,
};
pub use budget_service::BudgetService;
