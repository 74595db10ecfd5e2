use tagged_tuple::{tagged_tuple, tags};

tags! {
    pub struct Host;
    pub struct Port;
    pub struct Secure;
}

tagged_tuple! {
    /// Connection settings for one upstream peer.
    pub type Endpoint { Host => String, Port => u16, Secure => bool }
}

pub fn main() {
    let mut ep = Endpoint::new(("localhost".to_string(), 8080, false));
    *ep.get_mut::<Port>() += 1;
    println!("{:?} -> port {}", ep, ep.get::<Port>());
}
