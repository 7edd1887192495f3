use anyhow::Result;
use sqlx::{
    migrate::MigrateDatabase, sqlite::SqliteRow, Row, Sqlite, SqlitePool, Transaction,
};
use tracing::debug;

use crate::domain::{Expense, NewExpense};

// The database URL for the production database
pub const DATABASE_URL: &str = "sqlite:expenses.db";

/// ExpenseStore owns the connection pool for the expenses table
#[derive(Clone)]
pub struct ExpenseStore {
    pool: SqlitePool,
}

impl ExpenseStore {
    /// Open (creating if needed) the database at `url` and set up the schema
    pub async fn connect(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePool::connect(url).await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::connect(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // AUTOINCREMENT keeps ids of deleted rows from being handed out again
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Start a scoped session. Dropping it without [`Session::commit`] rolls
    /// back and hands the connection back to the pool.
    pub async fn session(&self) -> sqlx::Result<Session> {
        let tx = self.pool.begin().await?;
        Ok(Session { tx })
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        debug!("Closing expense store");
        self.pool.close().await;
    }
}

/// A request-scoped unit of work against the expenses table
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    /// All expenses in id order
    pub async fn list(&mut self) -> sqlx::Result<Vec<Expense>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, amount, category, date
            FROM expenses
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await?;

        rows.iter().map(row_to_expense).collect()
    }

    /// Store a new expense and return it with its assigned id
    pub async fn insert(&mut self, expense: &NewExpense) -> sqlx::Result<Expense> {
        let row = sqlx::query(
            r#"
            INSERT INTO expenses (title, amount, category, date)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, amount, category, date
            "#,
        )
        .bind(&expense.title)
        .bind(expense.amount)
        .bind(&expense.category)
        .bind(&expense.date)
        .fetch_one(&mut *self.tx)
        .await?;

        let stored = row_to_expense(&row)?;
        debug!("Inserted expense {}", stored.id);
        Ok(stored)
    }

    /// Delete an expense by id.
    /// Returns false when no expense with that id exists.
    pub async fn delete(&mut self, id: i64) -> sqlx::Result<bool> {
        // One statement: a read before the write would pin a stale snapshot
        let result = sqlx::query("DELETE FROM expenses WHERE id = ?")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            debug!("Deleted expense {}", id);
        }
        Ok(deleted)
    }

    pub async fn commit(self) -> sqlx::Result<()> {
        self.tx.commit().await
    }

    pub async fn rollback(self) -> sqlx::Result<()> {
        self.tx.rollback().await
    }
}

fn row_to_expense(row: &SqliteRow) -> sqlx::Result<Expense> {
    Ok(Expense {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        amount: row.try_get("amount")?,
        category: row.try_get("category")?,
        date: row.try_get("date")?,
    })
}
