// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() {
    // Git metadata is optional: builds from a source tarball (no .git)
    // still succeed, and the version module falls back to the crate version.
    if let Err(e) = EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()
    {
        println!("cargo:warning=vergen: {}", e);
    }
}
