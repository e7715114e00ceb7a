use exhaust_rail::builtin::{safe_get, safe_get_or, safe_index, safe_int_divide, IntDivisionError};
use exhaust_rail::convert::erase_outcome;
use exhaust_rail::{Error, Outcome};
use std::collections::HashMap;

fn port_for(services: &HashMap<&str, u16>, name: &str) -> Outcome<u16, exhaust_rail::AnyError> {
    erase_outcome(safe_get(services, name).map(|port| *port))
}

fn main() {
    let services = HashMap::from([("http", 80), ("https", 443)]);

    for name in ["https", "gopher"] {
        match port_for(&services, name) {
            Outcome::Ok(port) => println!("{name} -> {port}"),
            Outcome::Err(err) => println!("{name}: {} ({})", err.description(), err.throw_kind()),
        }
    }

    let ssh = safe_get_or(&services, "ssh", &22);
    println!("ssh with default -> {ssh}");

    let primes = [2, 3, 5, 7];
    for index in [2, 9] {
        match safe_index(&primes, index) {
            Outcome::Ok(prime) => println!("primes[{index}] = {prime}"),
            Outcome::Err(err) => println!("primes[{index}]: {err}"),
        }
    }

    for (a, b) in [(7, 2), (-7, 2), (1, 0), (i64::MIN, -1)] {
        match safe_int_divide(a, b) {
            Outcome::Ok(q) => println!("{a} // {b} = {q}"),
            Outcome::Err(IntDivisionError::ZeroDivision(err)) => println!("{a} // {b}: {err}"),
            Outcome::Err(IntDivisionError::Overflow(err)) => println!("{a} // {b}: {err}"),
        }
    }
}
