mod color_conversion_tests;
