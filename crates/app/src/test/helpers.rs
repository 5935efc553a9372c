//! Test Helpers

use crate::{
    domain::{
        customers::{
            CustomersService, CustomersServiceError,
            data::NewCustomer,
            models::CustomerUuid,
        },
        products::{
            ProductsService, ProductsServiceError,
            data::NewProduct,
            models::{Product, ProductUuid},
        },
        staff::{
            StaffService, StaffServiceError,
            data::NewStaffUser,
            models::{StaffRole, StaffUuid},
        },
    },
    test::TestContext,
};

pub(crate) fn new_product(name: &str, quantity: u32, sell_price: u64) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        brand: "Acme".to_string(),
        name: name.to_string(),
        image_path: None,
        description: Some(format!("{name} for testing")),
        quantity,
        cost_price: sell_price / 2,
        sell_price,
        rating: 3,
        is_active: true,
    }
}

pub(crate) fn new_customer(email: &str) -> NewCustomer {
    NewCustomer {
        uuid: CustomerUuid::new(),
        first_name: "Test".to_string(),
        last_name: "Customer".to_string(),
        email: email.to_string(),
        contact: "0123456789".to_string(),
    }
}

pub(crate) fn new_staff(email: &str, role: StaffRole) -> NewStaffUser {
    NewStaffUser {
        uuid: StaffUuid::new(),
        first_name: "Test".to_string(),
        last_name: "Staff".to_string(),
        email: email.to_string(),
        contact: "0123456789".to_string(),
        role,
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    quantity: u32,
    sell_price: u64,
) -> Result<Product, ProductsServiceError> {
    ctx.products
        .create_product(new_product("Widget", quantity, sell_price))
        .await
}

pub(crate) async fn create_customer(
    ctx: &TestContext,
    email: &str,
) -> Result<CustomerUuid, CustomersServiceError> {
    ctx.customers
        .create_customer(new_customer(email))
        .await
        .map(|customer| customer.uuid)
}

pub(crate) async fn create_staff(
    ctx: &TestContext,
    email: &str,
    role: StaffRole,
) -> Result<StaffUuid, StaffServiceError> {
    ctx.staff
        .create_staff(new_staff(email, role))
        .await
        .map(|staff| staff.uuid)
}
