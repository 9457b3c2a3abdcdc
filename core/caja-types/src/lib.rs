//! Domain records for the caja ledger.
//!
//! Field names and enum string literals reproduce the historical persisted
//! JSON exactly (camelCase fields, Spanish category names), so collections
//! written by earlier releases keep deserializing.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod keys;

/// Retail vs wholesale client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    Detalle,
    Mayorista,
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientType::Detalle => write!(f, "detalle"),
            ClientType::Mayorista => write!(f, "mayorista"),
        }
    }
}

/// A client record. `id` is a random identifier (see [`new_client_id`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "type")]
    pub client_type: ClientType,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleCategory {
    Mayor,
    Detalle,
    Arreglos,
    Grabados,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Efectivo,
    Tarjeta,
    Transferencia,
    Credito,
}

/// A sale record. `id` is timestamp-derived (see [`new_entry_id`]); the
/// client's display name is denormalized into `client_name` at sale time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: i64,
    pub client_id: String,
    pub category: SaleCategory,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub client_name: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Compras,
    Servicios,
    Suministros,
    Transporte,
    Marketing,
    Equipamiento,
    Mantenimiento,
    GastosGenerales,
    Personal,
    Impuestos,
    Otros,
}

/// Where the money for an expense came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingSource {
    EfectivoCaja,
    Banco,
    Tarjeta,
    CuentaCorriente,
    CuentaAhorro,
    VentasHoy,
    Prestamo,
    CreditoProveedor,
    TarjetaDebito,
    TarjetaCredito,
    Otros,
}

/// An expense record. `id` is timestamp-derived (see [`new_entry_id`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub description: String,
    pub funding_source: FundingSource,
    pub supplier: String,
    pub receipt_number: String,
    pub date: String,
    pub updated_at: String,
}

/// Generates a random client id.
pub fn new_client_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Generates a timestamp-derived id for sales and expenses
/// (milliseconds since the Unix epoch).
pub fn new_entry_id() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
