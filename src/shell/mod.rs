// Composition root for the service desk.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the seeded entity store and wire it into the use case handlers.
// - Compose the HTTP and GraphQL routes.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
