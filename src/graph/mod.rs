// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Transfer Method Graph
//!
//! Node types decoded from the platform's configuration responses:
//!
//! ```text
//! Country ─┬─ currencies: MappedConnection<Currency>
//!          └─ Currency ─┬─ transferMethodTypes: MappedConnection<TransferMethodType>
//!                       └─ TransferMethodType ─┬─ fees: Connection<Fee>
//!                                              └─ processingTime(s)
//! ```
//!
//! Nodes are immutable after decode. Country and currency equality is on
//! `(code, name)`; transfer method type equality adds the processing time.

pub mod country;
pub mod currency;
pub mod fee;
pub mod transfer_method_type;

pub use country::Country;
pub use currency::Currency;
pub use fee::{Fee, FeeRateType, ProcessingTimeRecord};
pub use transfer_method_type::{ProcessingTime, TransferMethodType};
