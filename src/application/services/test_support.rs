//! In-memory repository fakes for service tests

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::member::{Member, MemberRepository, Survey};
use crate::domain::order::{Order, OrderRepository};
use crate::domain::product::{Product, ProductRepository, ProductStatus};
use crate::domain::wishlist::{Wishlist, WishlistRepository};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

#[derive(Default)]
pub struct InMemoryMembers {
    rows: Mutex<Vec<Member>>,
    next_id: AtomicI64,
}

#[async_trait]
impl MemberRepository for InMemoryMembers {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Member>> {
        Ok(self.rows.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Member>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.email == email)
            .cloned())
    }

    async fn find_all_active(&self) -> DomainResult<Vec<Member>> {
        let mut members: Vec<Member> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|m| !m.deleted)
            .cloned()
            .collect();
        members.sort_by_key(|m| m.id);
        Ok(members)
    }

    async fn save(&self, mut member: Member) -> DomainResult<Member> {
        member.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.lock().unwrap().push(member.clone());
        Ok(member)
    }

    async fn update(&self, member: Member) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|m| m.id == member.id) else {
            return Err(DomainError::not_found("Member", "id", member.id));
        };
        *row = member;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
    next_id: AtomicI64,
}

impl InMemoryProducts {
    fn replace(&self, product: Product) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|p| p.id == product.id) else {
            return Err(DomainError::not_found("Product", "id", product.id));
        };
        *row = product;
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Product>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_all_visible(&self) -> DomainResult<Vec<Product>> {
        let mut products: Vec<Product> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.status != ProductStatus::Hidden)
            .cloned()
            .collect();
        products.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(products)
    }

    async fn find_with_season(&self, survey: &Survey) -> DomainResult<Vec<Product>> {
        let mut products: Vec<Product> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                p.status != ProductStatus::Hidden
                    && p.season.as_deref() == Some(survey.season.as_str())
            })
            .cloned()
            .collect();
        products.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(products)
    }

    async fn find_with_target(&self, survey: &Survey, target: &str) -> DomainResult<Vec<Product>> {
        let wanted = survey.value_for(target);
        let mut products: Vec<Product> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                p.status != ProductStatus::Hidden
                    && wanted.is_some()
                    && p.category.as_deref() == wanted
            })
            .cloned()
            .collect();
        products.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(products)
    }

    async fn save(&self, mut product: Product) -> DomainResult<Product> {
        product.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> DomainResult<()> {
        self.replace(product)
    }
}

pub struct InMemoryWishlists {
    rows: Mutex<Vec<Wishlist>>,
    next_id: AtomicI64,
    products: Arc<InMemoryProducts>,
}

#[async_trait]
impl WishlistRepository for InMemoryWishlists {
    async fn find_by_member(&self, member_id: i64) -> DomainResult<Vec<Wishlist>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.member_id == member_id)
            .cloned()
            .collect())
    }

    async fn find_by_member_and_product(
        &self,
        member_id: i64,
        product_id: i64,
    ) -> DomainResult<Option<Wishlist>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.member_id == member_id && w.product_id == product_id)
            .cloned())
    }

    async fn exists(&self, member_id: i64, product_id: i64) -> DomainResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|w| w.member_id == member_id && w.product_id == product_id))
    }

    async fn save_with_product(
        &self,
        mut wishlist: Wishlist,
        product: Product,
    ) -> DomainResult<Wishlist> {
        self.products.replace(product)?;
        wishlist.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.lock().unwrap().push(wishlist.clone());
        Ok(wishlist)
    }

    async fn delete_with_product(&self, wishlist_id: i64, product: Product) -> DomainResult<()> {
        self.products.replace(product)?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|w| w.id != wishlist_id);
        if rows.len() == before {
            return Err(DomainError::not_found("Wishlist", "id", wishlist_id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryOrders {
    rows: Mutex<Vec<Order>>,
    next_id: AtomicI64,
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Order>> {
        Ok(self.rows.lock().unwrap().iter().find(|o| o.id == id).cloned())
    }

    async fn find_by_member(&self, member_id: i64) -> DomainResult<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.member_id == member_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date).then(b.id.cmp(&a.id)));
        Ok(orders)
    }

    async fn save(&self, mut order: Order) -> DomainResult<Order> {
        order.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn update(&self, order: Order) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|o| o.id == order.id) else {
            return Err(DomainError::not_found("Order", "id", order.id));
        };
        *row = order;
        Ok(())
    }
}

pub struct InMemoryRepos {
    pub members: InMemoryMembers,
    pub products: Arc<InMemoryProducts>,
    pub wishlists: InMemoryWishlists,
    pub orders: InMemoryOrders,
}

impl RepositoryProvider for InMemoryRepos {
    fn members(&self) -> &dyn MemberRepository {
        &self.members
    }

    fn products(&self) -> &dyn ProductRepository {
        &*self.products
    }

    fn wishlists(&self) -> &dyn WishlistRepository {
        &self.wishlists
    }

    fn orders(&self) -> &dyn OrderRepository {
        &self.orders
    }
}

impl InMemoryRepos {
    pub fn shared() -> Arc<Self> {
        let products = Arc::new(InMemoryProducts::default());
        Arc::new(Self {
            members: InMemoryMembers::default(),
            wishlists: InMemoryWishlists {
                rows: Mutex::new(Vec::new()),
                next_id: AtomicI64::new(0),
                products: products.clone(),
            },
            products,
            orders: InMemoryOrders::default(),
        })
    }

    /// Seed a member, returning the stored row.
    pub async fn seed_member(&self, email: &str, survey: Option<Survey>) -> Member {
        let now = Utc::now();
        self.members
            .save(Member {
                id: 0,
                email: email.to_string(),
                name: "Member".to_string(),
                password_hash: "hash".to_string(),
                roles: vec!["USER".to_string()],
                deleted: false,
                survey,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap()
    }

    /// Seed a for-sale product, returning the stored row.
    pub async fn seed_product(
        &self,
        name: &str,
        season: Option<&str>,
        category: Option<&str>,
    ) -> Product {
        let now = Utc::now();
        self.products
            .save(Product {
                id: 0,
                name: name.to_string(),
                price: 100_000,
                status: ProductStatus::ForSale,
                content: "content".to_string(),
                content_detail: None,
                season: season.map(String::from),
                category: category.map(String::from),
                wishlist_count: 0,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap()
    }
}
