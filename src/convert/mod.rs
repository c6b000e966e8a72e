// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The time-standard conversion graph, one free function per edge.
//!
//! Every edge takes a [`JulianDate`](crate::JulianDate), checks that its tag
//! is the expected standard (or `Unspecified`), applies the shift without
//! collapsing the two-part date, and returns a date tagged with the target
//! standard.
//!
//! ```text
//!            ΔAT table          32.184 s            L_G
//!   UTC ◄──────────────► TAI ◄──────────► TT ◄──────────► TCG
//!    ▲                    ▲                ▲ ▲
//!    │ UT1−UTC            │ UT1−TAI   ΔT   │ │ TDB−TT
//!    ▼                    ▼                │ ▼
//!   UT1 ◄─────────────────┴────────────────┘ TDB ◄──────► TCB
//!                                                   L_B
//! ```
//!
//! | Kind | Edges |
//! |------|-------|
//! | Fixed offset | [`tai_to_tt`], [`tt_to_tai`], [`tt_to_tcg`], [`tcg_to_tt`], [`tcb_to_tdb`], [`tdb_to_tcb`] |
//! | Caller-supplied offset | [`tai_to_ut1`], [`ut1_to_tai`], [`tt_to_ut1`], [`ut1_to_tt`], [`tt_to_tdb`], [`tdb_to_tt`] |
//! | Modelled offset | [`tt_to_tdb_modelled`], [`tdb_to_tt_modelled`] |
//! | Leap-second table | [`utc_to_tai`], [`tai_to_utc`], [`ut1_to_utc`], [`utc_to_ut1`] |
//! | Composite | [`utc_to_tt`], [`tt_to_utc`], [`utc_to_tcg`], [`tcg_to_utc`], [`tai_to_tcg`], [`tcg_to_tai`], [`tt_to_tcb`], [`tcb_to_tt`], [`utc_to_tdb`], [`tdb_to_utc`], [`utc_to_tcb`], [`tcb_to_utc`], [`tcb_to_ut1`], [`ut1_to_tcb`] |

mod calibrated;
mod composite;
mod fixed;
mod utc;

pub use calibrated::{
    tai_to_ut1, tdb_to_tt, tdb_to_tt_modelled, tt_to_tdb, tt_to_tdb_modelled, tt_to_ut1,
    ut1_to_tai, ut1_to_tt,
};
pub use composite::{
    tai_to_tcg, tcb_to_tt, tcb_to_ut1, tcb_to_utc, tcg_to_tai, tcg_to_utc, tdb_to_utc, tt_to_tcb,
    tt_to_utc, ut1_to_tcb, utc_to_tcb, utc_to_tcg, utc_to_tdb, utc_to_tt,
};
pub use fixed::{tai_to_tt, tcb_to_tdb, tcg_to_tt, tdb_to_tcb, tt_to_tai, tt_to_tcg};
pub use utc::{tai_to_utc, ut1_to_utc, utc_to_tai, utc_to_ut1};
