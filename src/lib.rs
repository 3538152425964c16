// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            fs / log / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            |
//!            +---------------+---------------+
//!            v               v               v
//!           fs            persist         logging
//!   copy/move/list/rm   text, objects   Logger, tracing
//!            |               |               |
//!            +-------+-------+---------------+
//!                    v
//!   +-----------------------------------------+
//!   |  completion   handlers, dispatch        |
//!   +-----------------------------------------+
//!   |  foundation   error, location           |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod completion;
pub mod config;
pub mod error;
pub mod fs;
pub mod location;
pub mod logging;
pub mod persist;
