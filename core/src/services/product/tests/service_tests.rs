//! Unit tests for product service

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use sharito_shared::Pagination;

use crate::domain::entities::product::{NewProduct, Product, ProductDraft, ProductId};
use crate::domain::entities::user::{NewUser, UserId};
use crate::domain::value_objects::{Credential, Identity};
use crate::errors::{DomainError, ErrorKind};
use crate::repositories::{
    MockOrderRepository, MockProductRepository, MockUserRepository, ProductRepository,
    UserRepository,
};
use crate::services::product::{ProductService, ProductServiceConfig};

type Service<P> = ProductService<P, MockOrderRepository, MockUserRepository>;

struct Fixture<P: ProductRepository> {
    service: Service<P>,
    products: Arc<P>,
    orders: Arc<MockOrderRepository>,
    users: Arc<MockUserRepository>,
}

fn fixture_with<P: ProductRepository>(products: P, config: ProductServiceConfig) -> Fixture<P> {
    let products = Arc::new(products);
    let orders = Arc::new(MockOrderRepository::new());
    let users = Arc::new(MockUserRepository::new());
    let service = ProductService::new(products.clone(), orders.clone(), users.clone(), config);
    Fixture {
        service,
        products,
        orders,
        users,
    }
}

fn fixture() -> Fixture<MockProductRepository> {
    fixture_with(MockProductRepository::new(), ProductServiceConfig::default())
}

async fn add_user(users: &MockUserRepository, login: &str) -> Identity {
    let user = users
        .create(NewUser {
            login: login.to_string(),
            first_name: login.to_string(),
            last_name: "Tester".to_string(),
            email: format!("{}@example.com", login),
            credential: Credential::new(vec![1; 64], vec![2; 64]),
        })
        .await
        .unwrap();
    Identity::new(user.id)
}

fn draft(name: &str, photos: &[&str]) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        per_hour: 12.5,
        description: Some("cordless".to_string()),
        photos: photos.iter().map(|p| p.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_add_product_is_owned_by_caller() {
    let f = fixture();
    let owner = add_user(&f.users, "owner").await;

    let id = f
        .service
        .add_product(&owner, draft("Drill", &["a.jpg", "b.jpg"]))
        .await
        .unwrap();

    let found = f.service.get_product_with_owner(id).await.unwrap();
    assert_eq!(found.product.owner_id, owner.user_id());
    assert_eq!(found.product.photos, vec!["a.jpg", "b.jpg"]);
    assert_eq!(found.user.login, "owner");
}

#[tokio::test]
async fn test_failed_photo_leaves_nothing_behind() {
    let f = fixture_with(
        MockProductRepository::rejecting_photo("b.jpg"),
        ProductServiceConfig::default(),
    );
    let owner = add_user(&f.users, "owner").await;

    let err = f
        .service
        .add_product(&owner, draft("Drill", &["a.jpg", "b.jpg"]))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DatabaseFault);
    assert_eq!(f.products.count_stored().await, 0);
    assert_eq!(
        f.service.get_product_with_owner(1).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[tokio::test]
async fn test_add_product_validates_draft() {
    let f = fixture();
    let owner = add_user(&f.users, "owner").await;

    let mut bad_price = draft("Drill", &[]);
    bad_price.per_hour = -1.0;

    for bad in [draft("  ", &[]), bad_price, draft("Drill", &["a.jpg", ""])] {
        let err = f.service.add_product(&owner, bad).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
    assert_eq!(f.products.count_stored().await, 0);
}

/// Repository whose aggregate write never finishes in time
struct StalledProductRepository;

#[async_trait]
impl ProductRepository for StalledProductRepository {
    async fn write_product_aggregate(&self, _product: &NewProduct) -> Result<ProductId, DomainError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(1)
    }

    async fn find_by_id(&self, _id: ProductId) -> Result<Option<Product>, DomainError> {
        Ok(None)
    }

    async fn list(&self, _search: Option<&str>, _pagination: Pagination) -> Result<Vec<Product>, DomainError> {
        Ok(vec![])
    }

    async fn count(&self, _search: Option<&str>) -> Result<u64, DomainError> {
        Ok(0)
    }
}

#[tokio::test(start_paused = true)]
async fn test_write_deadline_is_database_fault() {
    let config = ProductServiceConfig {
        write_timeout: Duration::from_millis(50),
        ..ProductServiceConfig::default()
    };
    let f = fixture_with(StalledProductRepository, config);
    let owner = add_user(&f.users, "owner").await;

    let err = f.service.add_product(&owner, draft("Drill", &["a.jpg"])).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DatabaseFault);
}

#[tokio::test]
async fn test_get_missing_product_is_not_found() {
    let f = fixture();
    let err = f.service.get_product_with_owner(404).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_list_products_pages_and_search() {
    let f = fixture();
    let owner = add_user(&f.users, "owner").await;

    for i in 0..12 {
        let name = if i % 2 == 0 { format!("Drill {}", i) } else { format!("Saw {}", i) };
        f.service
            .add_product(&owner, draft(&name, &["main.jpg", "extra.jpg"]))
            .await
            .unwrap();
    }

    let first = f.service.list_products(1, None).await.unwrap();
    assert_eq!(first.data.len(), 10);
    assert_eq!(first.total, 12);
    assert_eq!(first.total_pages, 2);
    assert!(first.has_next);
    assert!(first.data.iter().all(|p| p.photos == vec!["main.jpg"]));

    let second = f.service.list_products(2, Some("")).await.unwrap();
    assert_eq!(second.data.len(), 2);
    assert!(!second.has_next);

    let drills = f.service.list_products(0, Some("drill")).await.unwrap();
    assert_eq!(drills.page, 1);
    assert_eq!(drills.total, 6);
    assert!(drills.data.iter().all(|p| p.name.starts_with("Drill")));
}

#[tokio::test]
async fn test_rent_product_and_list_orders() {
    let f = fixture();
    let owner = add_user(&f.users, "owner").await;
    let renter = add_user(&f.users, "renter").await;

    let product_id = f.service.add_product(&owner, draft("Drill", &["a.jpg"])).await.unwrap();
    f.orders.set_owner(product_id, owner.user_id()).await;

    let from = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap();
    f.service.rent_product(&renter, product_id, from, to).await.unwrap();

    let mine = f.service.get_orders(&renter, true).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].user.login, "renter");
    assert_eq!(mine[0].product.name, "Drill");
    assert!((mine[0].price - 37.5).abs() < 1e-9);

    let on_my_products = f.service.get_orders(&owner, false).await.unwrap();
    assert_eq!(on_my_products.len(), 1);
    assert_eq!(on_my_products[0].id, mine[0].id);

    assert!(f.service.get_orders(&owner, true).await.unwrap().is_empty());
    assert!(f.service.get_orders(&renter, false).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rent_rejects_inverted_window() {
    let f = fixture();
    let renter = add_user(&f.users, "renter").await;
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

    let err = f.service.rent_product(&renter, 1, at, at).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(f.orders.count().await, 0);
}

#[tokio::test]
async fn test_rent_unknown_product_is_not_found() {
    let f = fixture();
    let renter = add_user(&f.users, "renter").await;
    let from = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 5, 1, 11, 0, 0).unwrap();

    let err = f.service.rent_product(&renter, 999, from, to).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_identity_user_id() {
    let identity = Identity::new(5 as UserId);
    assert_eq!(identity.user_id(), 5);
}
