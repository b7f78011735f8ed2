//! Resource catalog
//!
//! The CMS entities the console manages, each with its REST path, required
//! access level, and declarative column model. This catalog is configuration,
//! not logic: every list screen is the generic table driven by one of these
//! column sets.

use serde_json::Value;

use crate::logic::session::AccessLevel;
use crate::model::types::{Column, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Appliances,
    Products,
    Categories,
    Carousels,
    Galleries,
    Quotes,
    Enquiries,
    Users,
    Downloads,
    Images,
    Newsletters,
}

/// Display price values as currency on screen (export keeps the raw number)
fn display_price(value: &Value, _row: &Record) -> String {
    match value.as_f64() {
        Some(amount) => format!("${:.2}", amount),
        None => value.as_str().unwrap_or("").to_string(),
    }
}

impl Resource {
    pub const ALL: [Resource; 11] = [
        Resource::Appliances,
        Resource::Products,
        Resource::Categories,
        Resource::Carousels,
        Resource::Galleries,
        Resource::Quotes,
        Resource::Enquiries,
        Resource::Users,
        Resource::Downloads,
        Resource::Images,
        Resource::Newsletters,
    ];

    /// REST path segment under the API base
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Appliances => "appliances",
            Resource::Products => "products",
            Resource::Categories => "categories",
            Resource::Carousels => "carousels",
            Resource::Galleries => "galleries",
            Resource::Quotes => "quotes",
            Resource::Enquiries => "enquiries",
            Resource::Users => "users",
            Resource::Downloads => "downloads",
            Resource::Images => "images",
            Resource::Newsletters => "newsletters",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Resource::Appliances => "Appliances",
            Resource::Products => "Products",
            Resource::Categories => "Categories",
            Resource::Carousels => "Carousels",
            Resource::Galleries => "Galleries",
            Resource::Quotes => "Quotes",
            Resource::Enquiries => "Enquiries",
            Resource::Users => "Users",
            Resource::Downloads => "Downloads",
            Resource::Images => "Images",
            Resource::Newsletters => "Newsletters",
        }
    }

    /// Capability the session guard requires before this screen renders.
    /// User administration and newsletter lists are admin-only; everything
    /// else is staff-level (admins qualify).
    pub fn access(&self) -> AccessLevel {
        match self {
            Resource::Users | Resource::Newsletters => AccessLevel::Admin,
            _ => AccessLevel::Staff,
        }
    }

    /// Field identifying a row in this resource's record sets
    pub fn key_field(&self) -> &'static str {
        "id"
    }

    /// Declarative column model for the list screen
    pub fn columns(&self) -> Vec<Column> {
        match self {
            Resource::Appliances => vec![
                Column::text("name", "Name"),
                Column::text("brand", "Brand").width(14),
                Column::text("category", "Category").width(16),
                Column::boolean("published", "Published").width(10),
                Column::date("created_at", "Created").width(20),
            ],
            Resource::Products => vec![
                Column::text("name", "Name"),
                Column::text("sku", "SKU").width(12),
                Column::text("price", "Price").width(10).with_display(display_price),
                Column::boolean("in_stock", "In Stock").width(9),
                Column::date("updated_at", "Updated").width(20),
            ],
            Resource::Categories => vec![
                Column::text("name", "Name"),
                Column::text("slug", "Slug").not_sortable(),
                Column::text("parent", "Parent").width(16),
                Column::boolean("active", "Active").width(7),
            ],
            Resource::Carousels => vec![
                Column::text("title", "Title"),
                Column::text("position", "Position").width(9),
                Column::boolean("enabled", "Enabled").width(8),
                Column::date("updated_at", "Updated").width(20),
            ],
            Resource::Galleries => vec![
                Column::text("title", "Title"),
                Column::text("image_count", "Images").width(7).not_filterable(),
                Column::boolean("published", "Published").width(10),
                Column::date("created_at", "Created").width(20),
            ],
            Resource::Quotes => vec![
                Column::text("customer", "Customer"),
                Column::text("email", "Email"),
                Column::text("status", "Status").width(10),
                Column::text("total", "Total").width(10).with_display(display_price),
                Column::date("created_at", "Created").width(20),
            ],
            Resource::Enquiries => vec![
                Column::text("name", "Name").width(18),
                Column::text("email", "Email"),
                Column::text("subject", "Subject"),
                Column::boolean("resolved", "Resolved").width(9),
                Column::date("created_at", "Received").width(20),
            ],
            Resource::Users => vec![
                Column::text("name", "Name"),
                Column::text("email", "Email"),
                Column::boolean("is_staff", "Staff").width(6),
                Column::boolean("is_admin", "Admin").width(6),
                Column::date("last_login", "Last Login").width(20),
            ],
            Resource::Downloads => vec![
                Column::text("title", "Title"),
                Column::text("file", "File").not_sortable(),
                Column::boolean("public", "Public").width(7),
                Column::date("created_at", "Created").width(20),
            ],
            Resource::Images => vec![
                Column::text("title", "Title"),
                Column::text("alt_text", "Alt Text").not_sortable(),
                Column::boolean("in_use", "In Use").width(7),
                Column::date("uploaded_at", "Uploaded").width(20),
            ],
            Resource::Newsletters => vec![
                Column::text("email", "Email"),
                Column::boolean("subscribed", "Subscribed").width(11),
                Column::date("subscribed_at", "Since").width(20),
            ],
        }
    }

    /// Next resource in display order (wraps)
    pub fn next(&self) -> Resource {
        let idx = Self::ALL.iter().position(|r| r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous resource in display order (wraps)
    pub fn prev(&self) -> Resource {
        let idx = Self::ALL.iter().position(|r| r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
