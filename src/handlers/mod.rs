// Two-tier handler layout: public endpoints (no auth) and protected
// endpoints (bearer auth, id-guarded paths). Route tables live in lib.rs;
// guards are attached per route group there.
pub mod protected;
pub mod public;
