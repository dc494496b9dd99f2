/*!
 * Unit tests for provider implementations
 */

pub mod openai_test;
