//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Configuration written into every fixture tree.
pub const FIXTURE_CONFIG: &str = "\
package_prefix: \"package com.example.shop.\"
extern_containers: [RedisClient]
aliases:
  - interface: CartRepository
    implementation: CartRepositoryImpl
group_colors:
  checkout: blue
  pricing: green
";

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create fixture directory");
    }
    fs::write(path, content).expect("failed to write fixture file");
}

/// Create a small shop codebase with a known dependency structure.
///
/// ```text
/// checkout_CheckoutService ──> checkout_CartRepository (interface)
///          │        ^                    ║ alias
///          │        └──────── checkout_CartRepositoryImpl
///          v
/// pricing_PricingEngine ──> Clock (never declared)
/// ```
///
/// `Money` is declared in both `checkout/Totals.kt` and
/// `pricing/Amounts.kt`, which produces one collision. `src/Broken.kt` is
/// not valid UTF-8. Files under `build/` and `.gradle/` must be ignored.
pub fn shop_fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let root = dir.path();

    write_file(root, "typegraph.yaml", FIXTURE_CONFIG.as_bytes());

    write_file(
        root,
        "src/checkout/CheckoutService.kt",
        b"package com.example.shop.checkout.service

import com.example.shop.pricing.PricingEngine

class CheckoutService @Inject constructor(
    private val carts: CartRepository,
    private val pricing: PricingEngine,
) {
    fun checkout() {}
}
",
    );

    write_file(
        root,
        "src/checkout/CartRepository.kt",
        b"package com.example.shop.checkout

interface CartRepository {
    fun load(id: String): Cart
}
",
    );

    write_file(
        root,
        "src/checkout/CartRepositoryImpl.kt",
        b"package com.example.shop.checkout

class CartRepositoryImpl @Inject constructor(
    private val checkout: CheckoutService,
) : CartRepository {
}
",
    );

    write_file(
        root,
        "src/checkout/Totals.kt",
        b"package com.example.shop.checkout

open class Money(
) {
}
",
    );

    write_file(
        root,
        "src/pricing/PricingEngine.kt",
        b"package com.example.shop.pricing.engine

class PricingEngine @Inject constructor(
    private val clock: Clock,
    private val cache: RedisClient<Price>,
) {
}
",
    );

    write_file(
        root,
        "src/pricing/Amounts.kt",
        b"package com.example.shop.pricing

open class Money(
) {
}
",
    );

    write_file(root, "src/Broken.kt", &[0xff, 0xfe, 0x00, 0x63]);
    write_file(
        root,
        "build/generated/Generated.kt",
        b"class Generated @Inject constructor(\n) {\n",
    );
    write_file(
        root,
        ".gradle/Cached.kt",
        b"class Cached @Inject constructor(\n) {\n",
    );
    write_file(root, "README.md", b"class NotKotlin @Inject constructor(\n) {\n");

    dir
}

/// Run the typegraph binary with `args` inside `dir`.
pub fn run_typegraph(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typegraph"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute typegraph binary")
}
