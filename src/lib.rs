//! # cvforge
//!
//! A minimal static résumé generator. One YAML or JSON résumé file plus a
//! directory of JSON themes go in; one self-contained HTML file — CSS
//! inlined, every theme embedded — comes out. A separate `deploy`
//! subcommand prints (by default never runs) the scp command that would
//! publish a production build.
//!
//! # Pipeline
//!
//! ```text
//! resume.{yaml,json} ─┐
//! themes/*.json ──────┼─→ render (Tera) ─→ CSS pipeline ─→ dist/index.html
//! template.html ──────┘
//! ```
//!
//! The build is strictly sequential: each step's output is the next step's
//! input, and the first failure aborts the run with a non-zero exit. There
//! is no cache, no partial output, no retry.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Build/deploy configuration from CLI flags + environment, built once at startup |
//! | [`data`] | Résumé source resolution (YAML/JSON) and parsing |
//! | [`theme`] | Theme loading, collection building, default-theme selection |
//! | [`render`] | Tera rendering with the `json`/`isString`/`isObject`/`isArray` helpers |
//! | [`css`] | grass compile + vendor prefixes + `<link>` → `<style>` inlining |
//! | [`build`] | Pipeline orchestration and output writing |
//! | [`deploy`] | Build-directory precheck and scp dry-run report |
//! | [`output`] | CLI output formatting — pure format functions, print wrappers |
//!
//! # Design Decisions
//!
//! ## Runtime Templates Over Compile-Time HTML
//!
//! The template is user content, not source code: people restyle their
//! résumé without recompiling anything. Tera gives logic-ful templates with
//! registered helpers, and the four helpers are plain variant checks on
//! JSON values, so template predicates stay cheap and deterministic.
//!
//! ## Everything Inlined
//!
//! The artifact is a single HTML file with the processed stylesheet embedded
//! in a `<style>` block and every theme embedded as JSON. It can be mailed,
//! hosted on any file server, or opened straight from disk — no asset paths
//! to break, nothing to keep in sync.
//!
//! ## Theme Selection Is a Contract
//!
//! A theme file literally named `default-theme` beats the `THEME` override,
//! which beats first-in-order. Users rely on dropping a `default-theme.json`
//! into the themes directory to pin the initial look, so the precedence is
//! documented and tested, not incidental.
//!
//! ## Deliberate Dry-Run Deploy
//!
//! `deploy` validates the build directory and prints the scp command it
//! would run. Execution sits behind a source-level constant, making the
//! subcommand documentation for the copy step rather than automation.

pub mod build;
pub mod config;
pub mod css;
pub mod data;
pub mod deploy;
pub mod output;
pub mod render;
pub mod theme;
