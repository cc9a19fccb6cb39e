/// Issued when a load starts; a completion may only apply its data while
/// its token is still the latest one issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}
