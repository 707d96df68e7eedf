mod test_account;
mod test_report;
