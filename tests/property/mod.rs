pub mod validator_proptest;
