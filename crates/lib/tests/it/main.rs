/*! Integration tests for vcityjson.
 *
 * This test suite is organized as a single integration test binary.
 *
 * The module structure follows the library:
 * - document: loading, saving and initializing versioned documents
 * - resolve: reference resolution across versions, branches and tags
 * - history: ancestry traversal and cycle handling
 * - checkout: extraction of plain documents
 * - mutation: store-level edits (messages, branches, tags, new versions)
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("vcityjson=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod checkout;
mod helpers;
mod mutation;
