pub mod request_gate;
