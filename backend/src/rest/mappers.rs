use shared::{ExpenseCreate, ExpenseResponse};

use crate::domain::{Expense, NewExpense};

pub struct ExpenseMapper;

impl ExpenseMapper {
    pub fn to_domain(dto: ExpenseCreate) -> NewExpense {
        NewExpense {
            title: dto.title,
            amount: dto.amount,
            category: dto.category,
            date: dto.date,
        }
    }

    pub fn to_dto(domain: Expense) -> ExpenseResponse {
        ExpenseResponse {
            id: domain.id,
            title: domain.title,
            amount: domain.amount,
            category: domain.category,
            date: domain.date,
        }
    }
}
