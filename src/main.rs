//! Forecourt Core Simulation.
//!
//! Walks the demo stock through the public API: free-text search,
//! multi-field sort, finance quotes, and the validation/clamping edge cases
//! a live input form hits.

use forecourt_core::*;
use rust_decimal_macros::dec;

fn main() {
    println!("Forecourt Core Simulation");
    println!("Catalogue Query Engine + Finance Quote Calculator\n");

    scenario_1_browse_and_search();
    scenario_2_sorting();
    scenario_3_default_quote();
    scenario_4_custom_quote();
    scenario_5_validation_and_clamping();

    println!("\nAll simulations completed successfully.");
}

/// Search narrows, then sort orders the narrowed set.
fn scenario_1_browse_and_search() {
    println!("Scenario 1: Browse and Search\n");

    let catalogue = Catalogue::demo_stock();
    println!("  {} vehicles in stock", catalogue.len());

    let fords = filter(catalogue.vehicles(), "ford");
    println!("  Search 'ford' matched {}:", fords.len());
    for vehicle in &fords {
        println!("    {}", vehicle);
    }

    // numeric fields are searchable by their decimal text
    let from_2022 = filter(catalogue.vehicles(), "2022");
    println!("  Search '2022' matched {} vehicles", from_2022.len());

    let everything = filter(catalogue.vehicles(), "   ");
    println!("  Blank search returns all {} vehicles\n", everything.len());
}

/// Every sort field, both directions.
fn scenario_2_sorting() {
    println!("Scenario 2: Sorting\n");

    let catalogue = Catalogue::demo_stock();

    let cheapest_first = sort(catalogue.vehicles(), SortField::Price, SortDirection::Ascending);
    println!("  Cheapest: {}", cheapest_first[0]);

    let newest_first = sort(catalogue.vehicles(), SortField::Year, SortDirection::Descending);
    println!("  Newest:   {}", newest_first[0]);

    let spec = SortSpec::new(SortField::Mileage, SortDirection::Ascending);
    let lowest_mileage = sort_with(catalogue.vehicles(), &spec);
    println!("  Lowest mileage: {}", lowest_mileage[0]);

    match "registration".parse::<SortField>() {
        Ok(_) => unreachable!(),
        Err(e) => println!("  Sorting by 'registration' rejected: {}\n", e),
    }
}

/// The 10% / 60-month policy defaults.
fn scenario_3_default_quote() {
    println!("Scenario 3: Default Finance Quote\n");

    let catalogue = Catalogue::demo_stock();
    let golf = catalogue.vehicle_by_id(&VehicleId::new("v-001")).unwrap();

    let mut calculator = FinanceCalculator::new();
    let result = calculator.calculate_default(golf.price).unwrap();

    println!("  {}", golf);
    print_quote(&result.quote);
}

/// A buyer-chosen deposit and term, read back from the quote slot.
fn scenario_4_custom_quote() {
    println!("Scenario 4: Custom Finance Quote\n");

    let mut calculator = FinanceCalculator::new();
    let price = Money::new(dec!(20000));
    let inputs = FinanceInputs { deposit: Money::new(dec!(4000)), term: 48 };

    calculator.calculate(price, inputs).unwrap();

    let current = calculator.current_quote().unwrap();
    println!("  Quote for deposit {} over {} months:", inputs.deposit, inputs.term);
    print_quote(&current.quote);
}

/// Per-keystroke validation and clamping.
fn scenario_5_validation_and_clamping() {
    println!("Scenario 5: Validation and Clamping\n");

    let price = Money::new(dec!(30000));

    println!("  deposit 0 valid:     {}", is_valid_deposit(price, Money::zero()));
    println!("  deposit 30000 valid: {}", is_valid_deposit(price, price));
    println!("  term 120 valid:      {}", is_valid_term(120));
    println!("  term 121 valid:      {}", is_valid_term(121));

    let clamped = clamp_deposit("35000", price).unwrap();
    println!("  deposit '35000' clamps to {}", clamped);

    let term = clamp_term("0", MAX_TERM_MONTHS).unwrap();
    println!("  term '0' clamps to {}", term);

    match clamp_deposit("abc", price) {
        Ok(_) => unreachable!(),
        Err(e) => println!("  deposit 'abc' rejected, input kept: {}", e),
    }
}

fn print_quote(quote: &FinanceQuote) {
    println!("    On the road price:  {}", quote.on_the_road_price);
    println!("    Total deposit:      {}", quote.total_deposit);
    println!("    Amount of credit:   {}", quote.total_amount_of_credit);
    println!("    Monthly payments:   {}", quote.number_of_monthly_payments);
    println!("    Monthly payment:    {}", quote.monthly_payment);
}
