//! Test helpers.

use std::sync::{Arc, Mutex};

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use tracing::{
    Subscriber,
    span::{Attributes, Id},
    subscriber::DefaultGuard,
};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
};
use uuid::Uuid;

use storefront_app::{
    auth::{
        ApiTokenMetadata, ApiTokenUuid, ApiTokenVersion, IssuedApiToken, MockAuthService,
        Principal, TokenOwner,
    },
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{CartLine, CartLineUuid},
        },
        customers::{
            MockCustomersService,
            models::{Customer, CustomerUuid},
        },
        dashboard::MockDashboardService,
        products::{
            MockProductsService,
            models::{Product, ProductUuid},
        },
        staff::{
            Capabilities, Capability, MockStaffService,
            models::{Privileges, StaffRole, StaffUser, StaffUuid},
        },
    },
};

use crate::state::State;

pub(crate) const TEST_CUSTOMER_UUID: CustomerUuid = CustomerUuid::from_uuid(Uuid::from_u128(1));
pub(crate) const TEST_STAFF_UUID: StaffUuid = StaffUuid::from_uuid(Uuid::from_u128(2));

/// Service doubles; any call without a matching expectation fails the test.
pub(crate) struct Mocks {
    pub products: MockProductsService,
    pub carts: MockCartsService,
    pub customers: MockCustomersService,
    pub staff: MockStaffService,
    pub dashboard: MockDashboardService,
    pub auth: MockAuthService,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            products: MockProductsService::new(),
            carts: MockCartsService::new(),
            customers: MockCustomersService::new(),
            staff: MockStaffService::new(),
            dashboard: MockDashboardService::new(),
            auth: MockAuthService::new(),
        }
    }
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            customers: Arc::new(self.customers),
            staff: Arc::new(self.staff),
            dashboard: Arc::new(self.dashboard),
            auth: Arc::new(self.auth),
        })
    }
}

pub(crate) fn customer_principal() -> Principal {
    Principal::Customer(TEST_CUSTOMER_UUID)
}

pub(crate) fn staff_principal(capabilities: &[Capability]) -> Principal {
    Principal::Staff {
        uuid: TEST_STAFF_UUID,
        capabilities: capabilities.iter().copied().collect::<Capabilities>(),
    }
}

pub(crate) fn admin_principal() -> Principal {
    staff_principal(&Capability::ALL)
}

/// Serve `route` with the mocked services, as `principal` when one is given.
pub(crate) fn service_as(principal: Option<Principal>, mocks: Mocks, route: Router) -> Service {
    let mut router = Router::new().hoop(inject(mocks.into_state()));

    if let Some(principal) = principal {
        router = router.hoop(inject(principal));
    }

    Service::new(router.push(route))
}

/// Names of every span opened while the paired guard is alive on this thread.
#[derive(Debug, Clone, Default)]
pub(crate) struct SpanNames(Arc<Mutex<Vec<&'static str>>>);

impl SpanNames {
    pub(crate) fn capture() -> (Self, DefaultGuard) {
        let names = Self::default();
        let guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(names.clone()));

        (names, guard)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.0
            .lock()
            .map(|names| names.contains(&name))
            .unwrap_or(false)
    }
}

impl<S: Subscriber> Layer<S> for SpanNames {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        if let Ok(mut names) = self.0.lock() {
            names.push(attrs.metadata().name());
        }
    }
}

pub(crate) fn make_product(uuid: ProductUuid) -> Product {
    Product {
        uuid,
        brand: "Acme".to_string(),
        name: "Widget".to_string(),
        image_path: None,
        description: Some("A widget".to_string()),
        quantity: 10,
        cost_price: 600,
        sell_price: 1000,
        rating: 4,
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_line(uuid: CartLineUuid, product: Product, quantity: u32) -> CartLine {
    CartLine {
        uuid,
        customer: TEST_CUSTOMER_UUID,
        product,
        quantity,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_customer(uuid: CustomerUuid) -> Customer {
    Customer {
        uuid,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        contact: "07700 900000".to_string(),
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_staff(uuid: StaffUuid, role: StaffRole) -> StaffUser {
    StaffUser {
        uuid,
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: "grace@example.com".to_string(),
        contact: "07700 900001".to_string(),
        role,
        is_active: true,
        privileges: Privileges::default(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_issued_token(owner: TokenOwner) -> IssuedApiToken {
    let uuid = ApiTokenUuid::new();

    IssuedApiToken {
        token: format!("sf_v1_{uuid}.00ff"),
        metadata: ApiTokenMetadata {
            uuid,
            owner,
            version: ApiTokenVersion::V1,
            created_at: Timestamp::UNIX_EPOCH,
            last_used_at: None,
            expires_at: None,
            revoked_at: None,
        },
    }
}
