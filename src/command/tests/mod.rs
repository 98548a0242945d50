mod reply_tests;
