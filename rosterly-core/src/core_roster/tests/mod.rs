/*
    Integration tests for core_roster subsystem

    Test suite covering:
    - Collection store operations against the in-memory backend
    - Busy flag and last-error bookkeeping
    - Query engine filter/sort scenarios
    - CSV export output
*/
