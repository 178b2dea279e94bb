// Composition root for the timesheets service.
//
// - Read config from the environment.
// - Instantiate the spreadsheet client.
// - Wire it into the use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
