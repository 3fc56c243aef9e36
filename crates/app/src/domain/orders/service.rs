//! Orders service: checkout and status control.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    auth::models::{Principal, Role},
    database::Db,
    domain::{
        carts::{models::SessionUuid, store::SessionStore},
        catalog::PgCatalogRepository,
        orders::{
            errors::OrdersServiceError,
            models::{Order, OrderLineUuid, OrderUuid},
            repositories::{PgOrderLinesRepository, PgOrdersRepository},
            status::OrderStatus,
        },
    },
};

#[derive(Clone)]
pub struct PgOrdersService {
    db: Db,
    sessions: Arc<dyn SessionStore>,
    catalog_repository: PgCatalogRepository,
    orders_repository: PgOrdersRepository,
    lines_repository: PgOrderLinesRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            db,
            sessions,
            catalog_repository: PgCatalogRepository::new(),
            orders_repository: PgOrdersRepository::new(),
            lines_repository: PgOrderLinesRepository::new(),
        }
    }

    async fn load_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        mut order: Order,
    ) -> Result<Order, OrdersServiceError> {
        let lines = self.lines_repository.get_order_lines(tx, order.uuid).await?;

        order.lines.extend(lines);

        Ok(order)
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn checkout(
        &self,
        caller: &Principal,
        session: SessionUuid,
    ) -> Result<Order, OrdersServiceError> {
        if caller.role != Role::Customer {
            return Err(OrdersServiceError::RoleRequired(Role::Customer));
        }

        let cart = self.sessions.load(session).await?;

        if cart.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        // One serializable transaction covers every price read and every row
        // write, so the order either lands complete — one row plus all its
        // lines, priced from a single catalog snapshot — or not at all.
        let mut tx = self.db.begin_serializable_transaction().await?;

        let mut total = 0u64;
        let lines = cart.lines();

        for line in &lines {
            let product = self
                .catalog_repository
                .get_product(&mut tx, line.product_uuid, Timestamp::now())
                .await
                .map_err(|error| match error {
                    sqlx::Error::RowNotFound => {
                        OrdersServiceError::ProductNotFound(line.product_uuid)
                    }
                    other => OrdersServiceError::Sql(other),
                })?;

            total += product.price * u64::from(line.quantity);
        }

        let mut order = self
            .orders_repository
            .create_order(&mut tx, OrderUuid::new(), caller.uuid, total)
            .await?;

        for line in &lines {
            let created = self
                .lines_repository
                .create_order_line(
                    &mut tx,
                    OrderLineUuid::new(),
                    order.uuid,
                    line.product_uuid,
                    line.quantity,
                )
                .await?;

            order.lines.push(created);
        }

        tx.commit().await?;

        // Only a durably committed order consumes the cart; any failure
        // above leaves it exactly as it was.
        self.sessions.clear(session).await?;

        info!(
            order = %order.uuid,
            customer = %caller.uuid,
            total = order.total,
            "order placed"
        );

        Ok(order)
    }

    async fn get_order(
        &self,
        caller: &Principal,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let order = match caller.role {
            // Customers only ever see their own orders; anyone else's is
            // indistinguishable from a missing one.
            Role::Customer => {
                self.orders_repository
                    .get_order_for_customer(&mut tx, order, caller.uuid)
                    .await?
            }
            Role::Restaurant => self.orders_repository.get_order(&mut tx, order).await?,
        };

        let order = self.load_lines(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_orders(&self, caller: &Principal) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let orders = match caller.role {
            Role::Customer => {
                self.orders_repository
                    .list_orders_for_customer(&mut tx, caller.uuid)
                    .await?
            }
            Role::Restaurant => self.orders_repository.list_orders(&mut tx).await?,
        };

        tx.commit().await?;

        Ok(orders)
    }

    async fn update_status(
        &self,
        caller: &Principal,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        if caller.role != Role::Restaurant {
            return Err(OrdersServiceError::RoleRequired(Role::Restaurant));
        }

        let mut tx = self.db.begin_transaction().await?;

        let current = self
            .orders_repository
            .get_order_for_update(&mut tx, order)
            .await?;

        if !current.status.can_advance_to(status) {
            return Err(OrdersServiceError::InvalidTransition {
                from: current.status,
                to: status,
            });
        }

        let updated = self
            .orders_repository
            .update_order_status(&mut tx, order, status)
            .await?;

        let updated = self.load_lines(&mut tx, updated).await?;

        tx.commit().await?;

        info!(order = %updated.uuid, status = %updated.status, "order status advanced");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Atomically convert the session's cart into a placed order.
    ///
    /// Requires the customer role. Every line's price is read and every row
    /// written inside one serializable transaction; on success the cart is
    /// cleared, on any failure it is left untouched.
    async fn checkout(
        &self,
        caller: &Principal,
        session: SessionUuid,
    ) -> Result<Order, OrdersServiceError>;

    /// Fetch one order with its lines. Customers see only their own orders.
    async fn get_order(
        &self,
        caller: &Principal,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError>;

    /// Orders visible to the caller, newest first.
    async fn list_orders(&self, caller: &Principal) -> Result<Vec<Order>, OrdersServiceError>;

    /// Advance an order along `placed → preparing → out_for_delivery`.
    ///
    /// Requires the restaurant role. Any other move is rejected with
    /// `InvalidTransition`.
    async fn update_status(
        &self,
        caller: &Principal,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;
}
