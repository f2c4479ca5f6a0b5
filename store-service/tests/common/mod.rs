use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use auth::PasswordHasher;
use chrono::Duration;
use chrono::Utc;
use store_service::category::errors::CategoryError;
use store_service::category::models::Category;
use store_service::category::models::CategoryId;
use store_service::category::models::CategoryName;
use store_service::category::ports::CategoryRepository;
use store_service::category::service::CategoryService;
use store_service::inbound::http::router::create_router;
use store_service::product::errors::ProductError;
use store_service::product::models::Product;
use store_service::product::models::ProductDetails;
use store_service::product::models::ProductId;
use store_service::product::ports::ProductRepository;
use store_service::product::service::ProductService;
use store_service::user::errors::UserError;
use store_service::user::models::EmailAddress;
use store_service::user::models::NewUser;
use store_service::user::models::PersonName;
use store_service::user::models::UpdateUserCommand;
use store_service::user::models::User;
use store_service::user::models::UserId;
use store_service::user::ports::UserRepository;
use store_service::user::service::UserService;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_HEADER: &str = "x-jwt-token";

/// Test application that spawns a real server over an in-memory store
pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryStore>,
    pub api_client: reqwest::Client,
    pub authenticator: Authenticator,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(InMemoryStore::default());

        let router = create_router(
            Arc::new(UserService::new(Arc::clone(&store))),
            Arc::new(ProductService::new(Arc::clone(&store))),
            Arc::new(CategoryService::new(Arc::clone(&store))),
            Arc::new(Authenticator::new(TEST_SECRET, Duration::hours(24))),
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            store,
            api_client: reqwest::Client::new(),
            authenticator: Authenticator::new(TEST_SECRET, Duration::hours(24)),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request carrying an access token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).header(TOKEN_HEADER, token)
    }

    /// Token for `user_id` signed with the server secret
    pub fn token_for(&self, user_id: i64, email: &str) -> String {
        self.authenticator
            .issue_token(user_id, email)
            .expect("Failed to issue token")
    }

    /// Token for `user_id` whose expiry is already in the past
    pub fn expired_token_for(&self, user_id: i64, email: &str) -> String {
        let claims = Claims::for_identity(user_id, email, Duration::hours(1))
            .with_expiration(Utc::now().timestamp() - 1);
        self.authenticator
            .sign(&claims)
            .expect("Failed to sign claims")
    }

    /// Register a user through the API and return its id
    pub async fn register(&self, email: &str, password: &str) -> i64 {
        let response = self
            .post("/api/register")
            .json(&serde_json::json!({
                "first_name": "Sofija",
                "last_name": "Petrovic",
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_i64().expect("Missing id")
    }

    /// Create a category through the API and return its id
    pub async fn create_category(&self, name: &str) -> i64 {
        let response = self
            .post("/api/newcategory")
            .json(&serde_json::json!({ "category_name": name }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_i64().expect("Missing id")
    }
}

#[derive(Default)]
struct StoreState {
    next_id: i64,
    users: BTreeMap<i64, User>,
    products: BTreeMap<i64, Product>,
    categories: BTreeMap<i64, Category>,
}

impl StoreState {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory stand-in for the Postgres repositories
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Insert a user with a fixed id, bypassing registration
    pub fn seed_user(&self, id: i64, email: &str, password: &str) {
        let password_hash = PasswordHasher::new()
            .hash(password)
            .expect("Failed to hash password");
        let user = User {
            id: UserId(id),
            first_name: PersonName::new("Seeded".to_string()).unwrap(),
            last_name: PersonName::new("User".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash,
            created_at: Utc::now(),
        };

        let mut state = self.state.lock().unwrap();
        state.next_id = state.next_id.max(id);
        state.users.insert(id, user);
    }

    pub fn user(&self, id: i64) -> Option<User> {
        self.state.lock().unwrap().users.get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut state = self.state.lock().unwrap();
        if state.users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        let id = state.allocate_id();
        let user = User {
            id: UserId(id),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: user.created_at,
        };
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.state.lock().unwrap().users.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn update(&self, id: &UserId, command: &UpdateUserCommand) -> Result<u64, UserError> {
        let mut state = self.state.lock().unwrap();
        match state.users.get_mut(&id.0) {
            Some(user) => {
                user.first_name = command.first_name.clone();
                user.last_name = command.last_name.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn create(&self, name: &CategoryName) -> Result<Category, CategoryError> {
        let mut state = self.state.lock().unwrap();
        let id = state.allocate_id();
        let now = Utc::now();
        let category = Category {
            id: CategoryId(id),
            name: name.clone(),
            created_at: now,
            updated_at: now,
        };
        state.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, CategoryError> {
        Ok(self.state.lock().unwrap().categories.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .categories
            .values()
            .cloned()
            .collect())
    }

    async fn update(&self, id: &CategoryId, name: &CategoryName) -> Result<u64, CategoryError> {
        let mut state = self.state.lock().unwrap();
        match state.categories.get_mut(&id.0) {
            Some(category) => {
                category.name = name.clone();
                category.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &CategoryId) -> Result<u64, CategoryError> {
        let mut state = self.state.lock().unwrap();
        if state.products.values().any(|p| p.category_id == *id) {
            return Err(CategoryError::InUse(id.to_string()));
        }
        Ok(state.categories.remove(&id.0).map_or(0, |_| 1))
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn create(&self, details: &ProductDetails) -> Result<Product, ProductError> {
        let mut state = self.state.lock().unwrap();
        if !state.categories.contains_key(&details.category_id.0) {
            return Err(ProductError::UnknownCategory(details.category_id.to_string()));
        }

        let id = state.allocate_id();
        let now = Utc::now();
        let product = Product {
            id: ProductId(id),
            name: details.name.clone(),
            short_description: details.short_description.clone(),
            description: details.description.clone(),
            price: details.price,
            created: now,
            updated: now,
            quantity: details.quantity,
            category_id: details.category_id,
        };
        state.products.insert(id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        Ok(self.state.lock().unwrap().products.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .products
            .values()
            .cloned()
            .collect())
    }

    async fn update(&self, id: &ProductId, details: &ProductDetails) -> Result<u64, ProductError> {
        let mut state = self.state.lock().unwrap();
        if !state.categories.contains_key(&details.category_id.0) {
            return Err(ProductError::UnknownCategory(details.category_id.to_string()));
        }

        match state.products.get_mut(&id.0) {
            Some(product) => {
                product.name = details.name.clone();
                product.short_description = details.short_description.clone();
                product.description = details.description.clone();
                product.price = details.price;
                product.quantity = details.quantity;
                product.category_id = details.category_id;
                product.updated = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &ProductId) -> Result<u64, ProductError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .products
            .remove(&id.0)
            .map_or(0, |_| 1))
    }
}
