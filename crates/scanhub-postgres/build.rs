#![forbid(unsafe_code)]

/// `embed_migrations!` is a procedural macro and Cargo cannot see the
/// migration directory as one of its inputs. Without this build script the
/// crate would not be rebuilt when a migration file is added or edited.
fn main() {
    println!("cargo:rerun-if-changed=./migrations");
}
