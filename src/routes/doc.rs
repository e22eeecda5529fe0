use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    cart::{Cart, CartItem},
    dto::{
        auth::{LoginRequest, TokenResponse},
        cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
        catalog::{CategoryList, CreateCategoryRequest, CreateProductRequest, ProductList},
        content::{
            ContactList, ContactRequest, PageList, ProjectList, ProjectPayload,
            UpdateAboutRequest, UpdatePageRequest,
        },
        orders::{CheckoutRequest, CreateOrderRequest, OrderList, UpdateOrderStatusRequest},
    },
    models::{
        AboutContent, AdminUser, Category, ContactSubmission, DashboardStats, Order, OrderItem,
        Product, Project, StaticPage,
    },
    response::{ApiResponse, Meta},
    routes::{admin, auth, cart as cart_routes, catalog, checkout, content, health},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        content::about,
        content::list_projects,
        content::get_project,
        content::list_pages,
        content::get_page,
        content::submit_contact,
        catalog::list_products,
        catalog::get_product,
        catalog::list_categories,
        cart_routes::view_cart,
        cart_routes::add_to_cart,
        cart_routes::update_quantity,
        cart_routes::remove_from_cart,
        cart_routes::clear_cart,
        checkout::checkout,
        auth::login,
        admin::me,
        admin::stats,
        admin::list_all_orders,
        admin::update_order_status,
        admin::create_product,
        admin::create_category,
        admin::update_page,
        admin::update_about,
        admin::create_project,
        admin::update_project,
        admin::delete_project,
        admin::list_contacts
    ),
    components(
        schemas(
            AboutContent,
            AdminUser,
            Category,
            ContactSubmission,
            DashboardStats,
            Order,
            OrderItem,
            Product,
            Project,
            StaticPage,
            Cart,
            CartItem,
            CartView,
            AddToCartRequest,
            UpdateQuantityRequest,
            CheckoutRequest,
            CreateOrderRequest,
            UpdateOrderStatusRequest,
            OrderList,
            LoginRequest,
            TokenResponse,
            CreateProductRequest,
            CreateCategoryRequest,
            ProductList,
            CategoryList,
            ProjectList,
            PageList,
            ContactList,
            ContactRequest,
            ProjectPayload,
            UpdateAboutRequest,
            UpdatePageRequest,
            Meta,
            ApiResponse<Product>,
            ApiResponse<CartView>,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<DashboardStats>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Content", description = "About, projects, pages and contact"),
        (name = "Catalog", description = "Products and categories"),
        (name = "Cart", description = "Session cart endpoints"),
        (name = "Checkout", description = "Order submission"),
        (name = "Auth", description = "Admin login"),
        (name = "Admin", description = "Token-guarded management endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
