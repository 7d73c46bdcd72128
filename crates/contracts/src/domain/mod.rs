//! DTO коллекций консоли. Каждая коллекция: сущность, поля сортировки,
//! специфичные поля фильтра и псевдоним `...Filter`.

pub mod a001_customer;
pub mod a002_worker;
pub mod a003_catalog;
pub mod a004_order;
pub mod a005_transaction;
pub mod a006_notification;
pub mod a007_audit_log;
pub mod common;
