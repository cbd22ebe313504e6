//! Repository for the `orders` and `order_items` tables.

use std::collections::HashMap;

use sqlx::{PgPool, Postgres, Transaction};
use storefront_core::orders::{PricedLine, PricedOrder};
use storefront_core::types::{DbId, Timestamp};

use crate::models::order::{Order, OrderItem, OrderItemRow, OrderRow};

const ORDER_COLUMNS: &str = "id, user_id, total_amount, ordered_at, \
                             shipping_name, shipping_address, shipping_phone_number";

const ITEM_COLUMNS: &str = "line_no, order_id, product_id, product_name, price, quantity";

/// Writes orders atomically with their items and reads them back grouped.
pub struct OrderRepo;

impl OrderRepo {
    /// Persist a priced order and all of its lines in one transaction.
    ///
    /// Any failing insert drops the transaction before commit, so either the
    /// header and every item become visible together or nothing does.
    pub async fn create(pool: &PgPool, order: &PricedOrder) -> Result<Order, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (order_id, ordered_at): (DbId, Timestamp) = sqlx::query_as(
            "INSERT INTO orders \
                (user_id, total_amount, shipping_name, shipping_address, shipping_phone_number) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, ordered_at",
        )
        .bind(order.user_id)
        .bind(order.total_amount)
        .bind(&order.shipping.name)
        .bind(&order.shipping.address)
        .bind(&order.shipping.phone_number)
        .fetch_one(&mut *tx)
        .await?;

        Self::insert_items_inner(&mut tx, order_id, &order.lines).await?;

        tx.commit().await?;

        let items = order
            .lines
            .iter()
            .map(|line| OrderItem::from_priced(order_id, line))
            .collect();

        Ok(Order {
            id: order_id,
            user_id: order.user_id,
            ordered_at,
            items,
            total_amount: order.total_amount,
            shipping_info: order.shipping.clone(),
        })
    }

    /// All orders with their items, newest first.
    ///
    /// Both reads run in one repeatable-read snapshot so an order committed
    /// between them cannot show up without its items.
    pub async fn list_with_items(pool: &PgPool) -> Result<Vec<Order>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let order_query =
            format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY ordered_at DESC, id DESC");
        let rows = sqlx::query_as::<_, OrderRow>(&order_query)
            .fetch_all(&mut *tx)
            .await?;

        if rows.is_empty() {
            tx.commit().await?;
            return Ok(Vec::new());
        }

        let order_ids: Vec<DbId> = rows.iter().map(|row| row.id).collect();
        let item_query = format!(
            "SELECT {ITEM_COLUMNS} FROM order_items \
             WHERE order_id = ANY($1) \
             ORDER BY order_id, line_no"
        );
        let item_rows = sqlx::query_as::<_, OrderItemRow>(&item_query)
            .bind(&order_ids)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        let mut items_by_order = group_items(item_rows);
        let orders = rows
            .into_iter()
            .map(|row| {
                let items = items_by_order.remove(&row.id).unwrap_or_default();
                Order::from_row(row, items)
            })
            .collect();

        Ok(orders)
    }

    async fn insert_items_inner(
        tx: &mut Transaction<'_, Postgres>,
        order_id: DbId,
        lines: &[PricedLine],
    ) -> Result<(), sqlx::Error> {
        for priced in lines {
            sqlx::query(
                "INSERT INTO order_items \
                    (order_id, line_no, product_id, product_name, price, quantity) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(order_id)
            .bind(priced.line_no)
            .bind(priced.line.product_id)
            .bind(&priced.line.name)
            .bind(priced.line.price)
            .bind(priced.line.quantity)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

/// Bucket item rows by owning order, keeping each bucket in row order.
fn group_items(rows: Vec<OrderItemRow>) -> HashMap<DbId, Vec<OrderItem>> {
    let mut grouped: HashMap<DbId, Vec<OrderItem>> = HashMap::new();
    for row in rows {
        grouped.entry(row.order_id).or_default().push(row.into());
    }
    grouped
}
