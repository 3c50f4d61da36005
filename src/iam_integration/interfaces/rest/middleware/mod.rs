pub mod identity_context_middleware;
