use chrono::Utc;
use qtty::Seconds;
use timescale::{delta_at_for_datetime, Observer, Time, TimeError, TAI, TCB, TT, UTC};

fn main() -> Result<(), TimeError> {
    let now = Utc::now();
    let utc = Time::<UTC>::from_utc(now)?;
    let tai: Time<TAI> = utc.to()?;
    let tt: Time<TT> = tai.to()?;
    let tdb = tt.to_tdb(&Observer::GEOCENTER)?;
    let tcb: Time<TCB> = tdb.to()?;
    let ut1 = utc.to_ut1(Seconds::new(0.0))?;

    let dat = delta_at_for_datetime(now)?;
    println!("ΔAT: {} ({:?})", dat.seconds(), dat.status());
    println!("{utc}");
    println!("{tai}");
    println!("{tt}");
    println!("{tdb}");
    println!("{tcb}");
    println!("{ut1} (UT1 − UTC = 0)");
    Ok(())
}
