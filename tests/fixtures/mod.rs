use exhaust_rail::{declare_error, error_union, ThrowKind};

declare_error! {
    pub struct Boom {
        description: "boom",
        throws: ThrowKind::Runtime,
    }
}

declare_error! {
    pub struct ErrorWithArgs {
        description: "{a},{b}:",
        throws: ThrowKind::InvalidValue,
        args: { a: i64, b: f64 },
    }
}

declare_error! {
    pub struct Rejected {
        description: "{who} rejected request {id}",
        throws: ThrowKind::InvalidArgument,
        args: { who: String, id: u32 },
    }
}

error_union! {
    pub enum FixtureError {
        Boom(Boom),
        WithArgs(ErrorWithArgs),
    }
}
